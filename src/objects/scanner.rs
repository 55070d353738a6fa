/// Pulls float tokens out of a `v` / `vn` line. A token is a maximal run of
/// digits, `-` and `.`; every other character is a delimiter.
pub struct Scanner<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(line: &'a str) -> Self {
        return Scanner {
            chars: line.chars().peekable(),
        };
    }

    fn is_number_char(c: char) -> bool {
        return c.is_ascii_digit() || c == '-' || c == '.';
    }

    fn skip_delimiters(&mut self) {
        while let Some(&c) = self.chars.peek() {
            match c {
                c if Scanner::is_number_char(c) => break,
                _ => {
                    self.chars.next();
                }
            }
        }
    }

    fn consume_token(&mut self) -> Option<String> {
        self.skip_delimiters();

        let mut token = String::new();
        while let Some(&c) = self.chars.peek() {
            match c {
                c if Scanner::is_number_char(c) => {
                    token.push(c);
                    self.chars.next();
                }

                _ => {
                    break;
                }
            }
        }

        if token.is_empty() {
            return None;
        }

        return Some(token);
    }

    /// Next token as `f32`. A run such as `-` or `1.2.3` still takes its
    /// position and reads as 0.
    pub fn next_float(&mut self) -> Option<f32> {
        let token = self.consume_token()?;

        match token.parse::<f32>() {
            Ok(n) => return Some(n),
            Err(_) => {
                log::debug!("unparsable numeric token `{}`, using 0", token);
                return Some(0.0);
            }
        }
    }

    /// First three tokens as x, y, z; missing fields stay 0.
    pub fn triple(mut self) -> [f32; 3] {
        let mut values = [0.0; 3];
        for value in values.iter_mut() {
            match self.next_float() {
                Some(n) => *value = n,
                None => break,
            }
        }

        return values;
    }
}
