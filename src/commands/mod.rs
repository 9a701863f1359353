//! Input tokenizing and command handlers for the interactive loop.

pub mod handlers;

/// Split raw input into a lowercased command token and its arguments.
///
/// Empty or all-whitespace input yields an empty command and no arguments.
pub fn parse_input(input: &str) -> (String, Vec<String>) {
    let mut parts = input.split_whitespace();
    let command = parts.next().unwrap_or("").to_lowercase();
    let args = parts.map(str::to_string).collect();
    (command, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        let (command, args) = parse_input("add John 0501234567");
        assert_eq!(command, "add");
        assert_eq!(args, vec!["John", "0501234567"]);
    }

    #[test]
    fn test_parse_input_lowercases_command() {
        let (command, args) = parse_input("ADD John 0501234567");
        assert_eq!(command, "add");
        assert_eq!(args[0], "John"); // arguments keep their case
    }

    #[test]
    fn test_parse_input_empty() {
        let (command, args) = parse_input("   ");
        assert_eq!(command, "");
        assert!(args.is_empty());
    }
}
