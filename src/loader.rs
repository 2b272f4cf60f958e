//! Loader for quote files.
//!
//! A quote file starts with a header line, followed by one `quote,title`
//! record per line. Either field may be wrapped in double quotes to carry
//! commas, with `""` standing for a literal quote character. Fields after
//! the title are ignored.

use crate::{error::Error, quote_index::QuoteIndex, Result};
use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_till},
    character::complete::{char, space0},
    combinator::{all_consuming, cut, map, value},
    multi::{fold_many0, separated_list1},
    sequence::{pair, preceded, terminated},
    IResult,
};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::{debug, warn};

/// One parsed line of a quote file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    pub quote: String,
    pub title: String,
}

/// Counts of what a load did.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LoadSummary {
    /// Records added to the index.
    pub records: usize,
    /// Malformed lines left out.
    pub skipped: usize,
}

/// Parses a record line, returning the reason on failure.
pub fn parse_record(line: &str) -> std::result::Result<Record, &'static str> {
    let mut fields = match all_consuming(separated_list1(char(','), field))(line) {
        Ok((_, fields)) => fields.into_iter(),
        Err(nom::Err::Failure(_)) => return Err("unterminated quoted field"),
        Err(_) => return Err("unexpected text after a quoted field"),
    };

    let (Some(quote), Some(title)) = (fields.next(), fields.next()) else {
        return Err("expected a quote and a title separated by a comma");
    };

    if title.is_empty() {
        return Err("empty title");
    }

    Ok(Record { quote, title })
}

fn field(input: &str) -> IResult<&str, String> {
    preceded(space0, alt((quoted_field, unquoted_field)))(input)
}

fn quoted_field(input: &str) -> IResult<&str, String> {
    preceded(
        char('"'),
        cut(terminated(
            fold_many0(
                alt((is_not("\""), value("\"", tag("\"\"")))),
                String::new,
                |mut field: String, part: &str| {
                    field.push_str(part);
                    field
                },
            ),
            pair(char('"'), space0),
        )),
    )(input)
}

fn unquoted_field(input: &str) -> IResult<&str, String> {
    map(take_till(|c: char| c == ','), |field: &str| field.trim_end().to_string())(input)
}

/// Adds every record from a reader to an index, skipping the header line.
///
/// Malformed lines are logged and skipped. Only a failure to read input is
/// returned as an error.
pub fn load(index: &mut QuoteIndex, reader: impl BufRead) -> Result<LoadSummary> {
    let mut summary = LoadSummary::default();

    for (number, line) in reader.split(b'\n').enumerate().skip(1) {
        let mut line = line?;

        if line.last() == Some(&b'\r') {
            line.pop();
        }

        let record = match String::from_utf8(line) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => parse_record(&line),
            Err(_) => Err("line is not valid UTF-8"),
        };

        match record {
            Ok(Record { quote, title }) => {
                index.add_quote(title, quote);
                summary.records += 1;
            }
            Err(reason) => {
                let error = Error::MalformedRecord {
                    line: number + 1,
                    reason,
                };

                warn!(%error, "skipping record");
                summary.skipped += 1;
            }
        }
    }

    debug!(
        records = summary.records,
        skipped = summary.skipped,
        titles = index.len(),
        "loaded quotes"
    );

    Ok(summary)
}

/// Opens a quote file and loads it into an index.
pub fn load_file(index: &mut QuoteIndex, path: impl AsRef<Path>) -> Result<LoadSummary> {
    let path = path.as_ref();

    debug!(path = %path.display(), "opening quote file");

    load(index, BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    fn record(quote: &str, title: &str) -> Record {
        Record {
            quote: quote.into(),
            title: title.into(),
        }
    }

    #[test]
    fn parse_plain_record() {
        assert_eq!(
            parse_record("I'll be back,The Terminator"),
            Ok(record("I'll be back", "The Terminator"))
        );
    }

    #[test]
    fn parse_trims_fields() {
        assert_eq!(
            parse_record("  Hello there , Star Wars  "),
            Ok(record("Hello there", "Star Wars"))
        );
    }

    #[test]
    fn parse_ignores_extra_fields() {
        assert_eq!(
            parse_record("Here's looking at you,Casablanca,1942"),
            Ok(record("Here's looking at you", "Casablanca"))
        );
    }

    #[test]
    fn parse_quoted_fields() {
        assert_eq!(
            parse_record(r#""Frankly, my dear, I don't give a damn",Gone with the Wind"#),
            Ok(record(
                "Frankly, my dear, I don't give a damn",
                "Gone with the Wind"
            ))
        );
        assert_eq!(
            parse_record(r#""Say ""hello"" to my little friend", "Scarface""#),
            Ok(record(r#"Say "hello" to my little friend"#, "Scarface"))
        );
    }

    #[test]
    fn parse_malformed_records() {
        assert!(parse_record("no title here").is_err());
        assert_eq!(parse_record("quote,"), Err("empty title"));
        assert_eq!(
            parse_record(r#""never closed,Title"#),
            Err("unterminated quoted field")
        );
    }

    #[test]
    fn load_skips_header() {
        let mut index = QuoteIndex::new();

        let summary = load(
            &mut index,
            "quote,movie\nDream within a dream,Inception\n".as_bytes(),
        )
        .unwrap();

        assert_eq!(
            summary,
            LoadSummary {
                records: 1,
                skipped: 0
            }
        );
        assert_eq!(index.titles().collect::<Vec<_>>(), ["Inception"]);
    }

    #[test]
    fn load_duplicate_titles() {
        let mut index = QuoteIndex::new();

        load(&mut index, "quote,title\nfirst,A\nsecond,A\n".as_bytes()).unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index.all_quotes_for("A").unwrap(), ["first", "second"]);
    }

    #[test]
    fn load_skips_malformed_and_blank_lines() {
        let mut index = QuoteIndex::new();

        let summary = load(
            &mut index,
            "quote,title\r\nfirst,A\r\n\r\nbroken\r\nsecond,B\r\n".as_bytes(),
        )
        .unwrap();

        assert_eq!(
            summary,
            LoadSummary {
                records: 2,
                skipped: 1
            }
        );
        assert_eq!(index.titles().collect::<Vec<_>>(), ["A", "B"]);
    }

    #[test]
    fn parse_text_after_quoted_field() {
        assert_eq!(
            parse_record(r#""quote" trailing,Title"#),
            Err("unexpected text after a quoted field")
        );
    }

    #[test]
    fn load_skips_invalid_utf8_line() {
        let mut index = QuoteIndex::new();

        let summary = load(
            &mut index,
            &b"quote,title\nfirst,A\ncaf\xe9,Amelie\nsecond,B\n"[..],
        )
        .unwrap();

        assert_eq!(
            summary,
            LoadSummary {
                records: 2,
                skipped: 1
            }
        );
        assert_eq!(index.titles().collect::<Vec<_>>(), ["A", "B"]);
    }

    #[test]
    fn load_empty_input() {
        let mut index = QuoteIndex::new();

        assert_eq!(load(&mut index, "".as_bytes()).unwrap(), LoadSummary::default());
        assert!(index.is_empty());
    }

    #[test]
    fn load_missing_file() {
        let mut index = QuoteIndex::new();

        let error = load_file(&mut index, "does/not/exist.csv").unwrap_err();

        assert!(matches!(error, Error::Io(error) if error.kind() == ErrorKind::NotFound));
        assert!(index.is_empty());
    }
}
