//! Models and parses the CJKRadicals.txt file.
//! See <https://www.unicode.org/Public/UCD/latest/ucd/CJKRadicals.txt>

use super::{content_lines, parse_codepoint};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct CjkRadicals {
    pub rows: Vec<Row>,
}

/// `{id}; {radical codepoint}; {ideograph codepoint}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    /// The dedicated radical character, not every radical has one.
    pub radical: Option<char>,
    pub ideograph: char,
}

impl CjkRadicals {
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows = vec![];
        for (line, content) in content_lines(text) {
            let fields = content.split(';').map(str::trim).collect::<Vec<_>>();
            let [id, radical, ideograph] = fields[..] else {
                return Err(Error::MalformedRadicalRow {
                    line,
                    content: content.to_string(),
                });
            };
            if ideograph.is_empty() {
                return Err(Error::MissingIdeograph {
                    line,
                    id: id.to_string(),
                });
            }

            let codepoint = |value: &str| {
                parse_codepoint(value).ok_or_else(|| Error::InvalidCodepoint {
                    line,
                    value: value.to_string(),
                })
            };
            let radical = if radical.is_empty() {
                None
            } else {
                Some(codepoint(radical)?)
            };
            rows.push(Row {
                id: id.to_string(),
                radical,
                ideograph: codepoint(ideograph)?,
            });
        }
        Ok(Self { rows })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_rows() {
        let text = "\
# CJKRadicals-15.1.0.txt
1; 2F00; 4E00

90'; ; 4E2C
";
        let radicals = CjkRadicals::parse(text).unwrap();
        assert_eq!(
            radicals.rows,
            &[
                Row {
                    id: "1".to_string(),
                    radical: Some('⼀'),
                    ideograph: '一',
                },
                Row {
                    id: "90'".to_string(),
                    radical: None,
                    ideograph: '丬',
                },
            ]
        );
    }

    #[test]
    fn missing_ideograph_is_fatal() {
        let err = CjkRadicals::parse("1; 2F00;").unwrap_err();
        assert!(matches!(err, Error::MissingIdeograph { line: 1, .. }));
    }

    #[test]
    fn wrong_field_count_is_fatal() {
        let err = CjkRadicals::parse("1; 2F00").unwrap_err();
        assert!(matches!(err, Error::MalformedRadicalRow { line: 1, .. }));
    }

    #[test]
    fn invalid_codepoint_is_fatal() {
        let err = CjkRadicals::parse("1; 2F00; zz").unwrap_err();
        assert!(matches!(err, Error::InvalidCodepoint { line: 1, .. }));
    }
}
