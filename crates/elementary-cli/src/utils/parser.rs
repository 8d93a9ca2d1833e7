use thiserror::Error;

/// How the user named an element on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementQuery {
    Number(u32),
    /// A symbol or a name, matched case-insensitively.
    Text(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Element query cannot be empty. Expected an atomic number, symbol or name.")]
    Empty,
}

pub fn parse_element_query(input: &str) -> Result<ElementQuery, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    match trimmed.parse::<u32>() {
        Ok(number) => Ok(ElementQuery::Number(number)),
        Err(_) => Ok(ElementQuery::Text(trimmed.to_string())),
    }
}
