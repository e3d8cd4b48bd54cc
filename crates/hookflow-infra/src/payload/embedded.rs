use hookflow_core::payload::PayloadSource;

const Q1: &str = include_str!("../../sql/q1.sql");
const Q2: &str = include_str!("../../sql/q2.sql");

/// The two SQL payloads compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedPayloadSource;

impl EmbeddedPayloadSource {
    pub fn new() -> Self {
        Self
    }

    /// Raw bundled payload A.
    pub fn q1() -> &'static str {
        Q1
    }

    /// Raw bundled payload B.
    pub fn q2() -> &'static str {
        Q2
    }
}

impl PayloadSource for EmbeddedPayloadSource {
    async fn load(&self, resource: &str) -> Result<Option<String>, std::io::Error> {
        let content = match resource {
            "sql/q1.sql" => Some(Q1),
            "sql/q2.sql" => Some(Q2),
            _ => None,
        };
        Ok(content.map(str::to_string))
    }
}
