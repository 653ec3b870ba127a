use marvel_data::{Client, Transport, errors::ClientError};
use serde_json::{Value, json};
use std::{
    cell::RefCell,
    collections::HashMap,
    path::{Path, PathBuf},
};

/// Answers requests with the recorded responses under `tests/fixtures/`.
///
/// `events/336` is answered with `tests/fixtures/events/336.json`. Paths without a fixture get the
/// same 404 body the API sends for unknown ids.
pub struct Fixtures {
    root: PathBuf,
    overrides: HashMap<&'static str, &'static str>,
    requests: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl Fixtures {
    pub fn new() -> Self {
        Self {
            root: Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"),
            overrides: HashMap::new(),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Answers `path` with the fixture named `fixture` instead.
    #[allow(dead_code)]
    pub fn with(mut self, path: &'static str, fixture: &'static str) -> Self {
        self.overrides.insert(path, fixture);
        self
    }

    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.requests.borrow().clone()
    }
}

impl Transport for Fixtures {
    fn fetch(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, ClientError> {
        self.requests.borrow_mut().push((
            path.to_owned(),
            params
                .iter()
                .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
                .collect(),
        ));

        let name = self.overrides.get(path).copied().unwrap_or(path);
        let file = self.root.join(format!("{name}.json"));

        let Ok(body) = std::fs::read_to_string(&file) else {
            let kind = path.split('/').next().unwrap_or(path).trim_end_matches('s');
            return Ok(json!({
                "code": 404,
                "status": format!("We couldn't find that {kind}")
            }));
        };

        Ok(serde_json::from_str(&body).expect("fixtures should be valid JSON"))
    }
}

pub fn client() -> Client<Fixtures> {
    Client::with_transport(Fixtures::new())
}
