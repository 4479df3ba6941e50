/// Characters that separate tokens. There is no quoting or escaping.
const DELIMITERS: &[char] = &[' ', '\t', '\r', '\n', '\x07'];

pub fn tokenize(line: &str) -> Vec<String> {
    let tokens: Vec<String> = line
        .split(DELIMITERS)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect();
    log::trace!("tokens: {:?}", tokens);
    tokens
}
