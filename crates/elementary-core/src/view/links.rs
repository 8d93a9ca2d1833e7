pub fn wikipedia_url(lang: &str, page: &str) -> String {
    format!("https://{}.wikipedia.org/wiki/{}", lang, page)
}

pub fn video_url(id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", id)
}
