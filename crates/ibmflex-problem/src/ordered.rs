use serde_yaml::{Mapping, Value};

/// Insertion-ordered report, rendered as a YAML document.
///
/// Values are anything convertible to a YAML value: strings, numbers,
/// lists, or nested reports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedMaps {
    map: Mapping,
}

impl OrderedMaps {
    /// Empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key`; an existing key keeps its position and takes the new value.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.map.insert(Value::String(key.into()), value.into());
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.map.keys().filter_map(Value::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when no entry was added.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Underlying YAML mapping.
    pub fn as_mapping(&self) -> &Mapping {
        &self.map
    }

    /// Block-style YAML body, without document markers.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.map)
    }

    /// YAML document framed by `---` lines.
    pub fn render(&self) -> String {
        frame_document(self.to_yaml())
    }
}

/// Frames a rendered body; a failure becomes a one-key `error` document.
fn frame_document(body: Result<String, serde_yaml::Error>) -> String {
    let body = body.or_else(|err| {
        tracing::warn!(error = %err, "report rendering failed");
        let mut fallback = Mapping::new();
        fallback.insert(Value::from("error"), Value::from(err.to_string()));
        serde_yaml::to_string(&fallback)
    });
    match body {
        Ok(body) => format!("---\n{}---\n", body),
        Err(_) => "---\nerror: report rendering failed\n---\n".to_string(),
    }
}

impl From<OrderedMaps> for Value {
    fn from(value: OrderedMaps) -> Self {
        Value::Mapping(value.map)
    }
}
