use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

use crate::error::{Error, Result};

/// Largest alphabet accepted by default.
pub const DEFAULT_MAX_SYMBOLS: usize = 1_000_000_000;
/// Alphabets up to this size get one output line per symbol by default.
pub const DEFAULT_LIST_LIMIT: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_symbols: usize,
    pub list_limit: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_symbols: DEFAULT_MAX_SYMBOLS,
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl Limits {
    /// Loads the limits from a `.properties` file; missing keys keep their defaults.
    ///
    /// # Arguments
    ///
    /// * `path` - The properties file
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use inplace_codes::properties::Limits;
    ///
    /// let limits = Limits::load("inplace.properties").unwrap();
    /// println!("{}", limits.max_symbols);
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let map = java_properties::read(BufReader::new(file)).map_err(|e| Error::Config {
            key: "<file>".to_owned(),
            value: e.to_string(),
        })?;

        Self::try_from(map)
    }
}

impl TryFrom<HashMap<String, String>> for Limits {
    type Error = Error;

    fn try_from(value: HashMap<String, String>) -> Result<Self> {
        let mut limits = Limits::default();

        if let Some(max_symbols) = value.get("maxsymbols") {
            limits.max_symbols = parse_positive("maxsymbols", max_symbols)?;
        }
        if let Some(list_limit) = value.get("listlimit") {
            limits.list_limit = list_limit.trim().parse().map_err(|_| Error::Config {
                key: "listlimit".to_owned(),
                value: list_limit.clone(),
            })?;
        }

        Ok(limits)
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(Error::Config { key: key.to_owned(), value: raw.to_owned() }),
    }
}

impl From<Limits> for String {
    fn from(val: Limits) -> Self {
        let mut s = String::new();

        s.push_str("#inplace_codes properties\n");
        s.push_str(&format!("maxsymbols={}\n", val.max_symbols));
        s.push_str(&format!("listlimit={}\n", val.list_limit));

        s
    }
}

#[test]
fn test_defaults_when_keys_missing() {
    let limits = Limits::try_from(HashMap::new()).unwrap();

    assert_eq!(limits, Limits::default());
    assert_eq!(limits.max_symbols, 1_000_000_000);
    assert_eq!(limits.list_limit, 100);
}

#[test]
fn test_keys_override_defaults() {
    let map = HashMap::from([
        ("maxsymbols".to_owned(), "5000".to_owned()),
        ("listlimit".to_owned(), " 0 ".to_owned()),
    ]);

    let limits = Limits::try_from(map).unwrap();

    assert_eq!(limits.max_symbols, 5000);
    assert_eq!(limits.list_limit, 0);
}

#[test]
fn test_rejects_bad_values() {
    let zero = HashMap::from([("maxsymbols".to_owned(), "0".to_owned())]);
    assert!(matches!(Limits::try_from(zero), Err(Error::Config { key, .. }) if key == "maxsymbols"));

    let text = HashMap::from([("listlimit".to_owned(), "many".to_owned())]);
    assert!(matches!(Limits::try_from(text), Err(Error::Config { key, .. }) if key == "listlimit"));
}

#[test]
fn test_properties_text_reads_back() {
    let limits = Limits { max_symbols: 1234, list_limit: 7 };
    let text: String = limits.into();

    let map = java_properties::read(text.as_bytes()).unwrap();

    assert_eq!(Limits::try_from(map).unwrap(), limits);
}
