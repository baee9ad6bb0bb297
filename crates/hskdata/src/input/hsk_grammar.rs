//! Models and parses the HSK 3.0 grammar documents.
//! See <https://github.com/krmanik/HSK-3.0>
//!
//! The documents are loosely structured plain text. Category headers look like
//! `A.1.2 词类`, grammar points start with a bracketed code like `【一01】名词`
//! and are followed by example sentences. Everything else is noise.

use hsk::{segmenter, Lexicon};
use hsk_core::{dataset_types::GrammarPoint, level_label, Level};
use itertools::Itertools;
use regex::Regex;
use std::sync::LazyLock;

/// The document of each level.
pub const GRAMMAR_DOCUMENTS: [(Level, &str); 7] = [
    (1, "HSK 1.txt"),
    (2, "HSK 2.txt"),
    (3, "HSK 3.txt"),
    (4, "HSK 4.txt"),
    (5, "HSK 5.txt"),
    (6, "HSK 6.txt"),
    (7, "HSK 7-9.txt"),
];

const SOURCE_BASE_URL: &str =
    "https://github.com/krmanik/HSK-3.0/blob/main/New%20HSK%20(2021)/HSK%20Grammar/";

pub const MAX_EXAMPLES: usize = 4;

static CATEGORY_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^A\.[\d.\-—ー]+").expect("invalid regex"));
static POINT_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^【([^】]+)】\s*(.+)$").expect("invalid regex"));

/// Lines starting with these are never examples.
const NON_EXAMPLE_PREFIXES: [&str; 2] = ["A.", "※"];

pub fn source_url(filename: &str) -> String {
    format!("{SOURCE_BASE_URL}{}", filename.replace(' ', "%20"))
}

#[derive(Debug, Clone)]
pub struct GrammarDocument {
    pub level: Level,
    pub filename: String,
    pub text: String,
}

impl GrammarDocument {
    pub fn parse<L: Lexicon + ?Sized>(&self, lexicon: &L) -> Vec<GrammarPoint> {
        let mut parser = GrammarDocumentParser::new(self.level, &self.filename, lexicon);
        for line in self.text.lines() {
            parser.ingest(line);
        }
        parser.finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Category(&'a str),
    PointHeader { code: &'a str, title: &'a str },
    Other(&'a str),
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            Line::Blank
        } else if let Some(m) = CATEGORY_HEADER.find(line) {
            Line::Category(line[m.end()..].trim())
        } else if let Some(captures) = POINT_HEADER.captures(line) {
            let (_, [code, title]) = captures.extract();
            Line::PointHeader {
                code,
                title: title.trim(),
            }
        } else {
            Line::Other(line)
        }
    }
}

/// A grammar point whose examples are still being collected.
#[derive(Debug)]
struct OpenPoint {
    id: String,
    code: String,
    title: String,
    category: String,
    examples: Vec<String>,
}

/// Turns the lines of one level's document into grammar points.
pub struct GrammarDocumentParser<'a, L: ?Sized> {
    level: Level,
    source: String,
    lexicon: &'a L,
    category: String,
    current_point: Option<OpenPoint>,
    sequence: usize,
    points: Vec<GrammarPoint>,
}

impl<'a, L: Lexicon + ?Sized> GrammarDocumentParser<'a, L> {
    pub fn new(level: Level, filename: &str, lexicon: &'a L) -> Self {
        Self {
            level,
            source: source_url(filename),
            lexicon,
            category: String::new(),
            current_point: None,
            sequence: 0,
            points: vec![],
        }
    }

    pub fn ingest(&mut self, line: &str) {
        match Line::classify(line) {
            Line::Blank => {}
            Line::Category(category) => {
                // an open point stays open, the category only applies to the points after it
                if !category.is_empty() {
                    tracing::trace!("category {category}");
                    self.category = category.to_string();
                }
            }
            Line::PointHeader { code, title } => {
                self.flush();
                self.sequence += 1;
                let id = format!("g-{}-{:03}", self.level, self.sequence);
                tracing::trace!("opening {id} {code}");
                self.current_point = Some(OpenPoint {
                    id,
                    code: normalize_code(code),
                    title: title.to_string(),
                    category: self.category.clone(),
                    examples: vec![],
                });
            }
            Line::Other(line) => {
                if let Some(point) = &mut self.current_point {
                    if is_example(line) {
                        point.examples.push(line.to_string());
                    }
                }
            }
        }
    }

    /// Finishes the open grammar point, if any.
    pub fn flush(&mut self) {
        let Some(point) = self.current_point.take() else {
            return;
        };

        let examples = point
            .examples
            .iter()
            .map(|example| example.split_whitespace().join(" "))
            .filter(|example| !example.is_empty())
            .unique()
            .take(MAX_EXAMPLES)
            .collect::<Vec<_>>();
        let title_pinyin = segmenter::text_to_pinyin(&point.title, self.lexicon);
        let examples_pinyin = examples
            .iter()
            .map(|example| segmenter::text_to_pinyin(example, self.lexicon))
            .collect();

        self.points.push(GrammarPoint {
            id: point.id,
            level: self.level,
            level_label: level_label(self.level),
            code: point.code,
            title: point.title,
            category: point.category,
            examples,
            source: self.source.clone(),
            title_pinyin,
            examples_pinyin,
        });
    }

    /// Flushes the last point and returns the points in the order they were found.
    pub fn finish(mut self) -> Vec<GrammarPoint> {
        self.flush();
        self.points
    }
}

fn is_example(line: &str) -> bool {
    hsk::contains_cjk_unified(line)
        && !NON_EXAMPLE_PREFIXES
            .iter()
            .any(|prefix| line.starts_with(prefix))
}

/// `一 — 01` -> `一-01`
fn normalize_code(code: &str) -> String {
    code.replace(['—', 'ー', '－'], "-").replace(' ', "")
}
