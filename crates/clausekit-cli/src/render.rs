use crate::cli::RenderArgs;
use crate::config::{ConfigFile, OutputFormat};
use anyhow::Context;
use clausekit::{CallQuery, ClauseResult, InsertQuery, SelectQuery, Statement, UpdateQuery, Value};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

/// A request file: `[[statement]]` entries in TOML, or `{"statement": [...]}`
/// in JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestFile {
    #[serde(default, rename = "statement")]
    pub statements: Vec<StatementRequest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    Select,
    Insert,
    Update,
    Call,
}

/// One statement and its arguments. Absent fields are null.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatementRequest {
    pub kind: RequestKind,
    #[serde(default)]
    pub table: Value,
    #[serde(default)]
    pub columns: Value,
    #[serde(default, rename = "where")]
    pub condition: Value,
    #[serde(default)]
    pub join_type: Value,
    #[serde(default)]
    pub join: Value,
    #[serde(default)]
    pub on: Value,
    #[serde(default)]
    pub group: Value,
    #[serde(default)]
    pub having: Value,
    #[serde(default)]
    pub order: Value,
    #[serde(default)]
    pub limit: Value,
    #[serde(default)]
    pub values: Value,
    #[serde(default)]
    pub target: Value,
    #[serde(default)]
    pub parameters: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendered {
    pub kind: RequestKind,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<Vec<Value>>,
}

impl StatementRequest {
    pub fn render(&self) -> ClauseResult<Rendered> {
        let (query, param) = match self.kind {
            RequestKind::Select => {
                let query = SelectQuery::new(self.table.clone())
                    .columns(self.columns.clone())
                    .join(self.join_type.clone(), self.join.clone(), self.on.clone())
                    .filter(self.condition.clone())
                    .group_by(self.group.clone(), self.having.clone())
                    .order_by(self.order.clone())
                    .limit(self.limit.clone())
                    .build_sql()?;
                (query, None)
            }
            RequestKind::Insert => {
                let query = InsertQuery::new(self.table.clone())
                    .values(self.values.clone())
                    .build_sql()?;
                (query, None)
            }
            RequestKind::Update => {
                let query = UpdateQuery::new(self.table.clone())
                    .set(self.values.clone())
                    .filter(self.condition.clone())
                    .build_sql()?;
                (query, None)
            }
            RequestKind::Call => {
                let call = CallQuery::new(self.target.clone())
                    .parameters(self.parameters.clone())
                    .build()?;
                (call.query, Some(call.param))
            }
        };

        Ok(Rendered {
            kind: self.kind,
            query,
            param,
        })
    }

    /// Fields that were set but play no part in this kind of statement.
    pub fn ignored_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("table", &self.table),
            ("columns", &self.columns),
            ("where", &self.condition),
            ("join_type", &self.join_type),
            ("join", &self.join),
            ("on", &self.on),
            ("group", &self.group),
            ("having", &self.having),
            ("order", &self.order),
            ("limit", &self.limit),
            ("values", &self.values),
            ("target", &self.target),
            ("parameters", &self.parameters),
        ];
        let used: &[&str] = match self.kind {
            RequestKind::Select => &[
                "table",
                "columns",
                "where",
                "join_type",
                "join",
                "on",
                "group",
                "having",
                "order",
                "limit",
            ],
            RequestKind::Insert => &["table", "values"],
            RequestKind::Update => &["table", "values", "where"],
            RequestKind::Call => &["target", "parameters"],
        };

        fields
            .into_iter()
            .filter(|(name, value)| !value.is_null() && !used.contains(name))
            .map(|(name, _)| name)
            .collect()
    }
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let config = ConfigFile::resolve(args.config.as_deref())?;
    let format = args.format.unwrap_or(config.output.format);

    let mut rendered = Vec::new();
    for path in &args.files {
        rendered.extend(render_file(path)?);
    }

    print!(
        "{}",
        format_output(&rendered, format, &config.output.terminator)?
    );
    Ok(())
}

fn render_file(path: &Path) -> anyhow::Result<Vec<Rendered>> {
    let requests = load_requests(path)?;
    if requests.statements.is_empty() {
        tracing::warn!(file = %path.display(), "request file has no statements");
    }

    requests
        .statements
        .iter()
        .enumerate()
        .map(|(i, request)| {
            for field in request.ignored_fields() {
                tracing::warn!(
                    file = %path.display(),
                    statement = i + 1,
                    kind = ?request.kind,
                    field,
                    "field is ignored for this statement kind"
                );
            }
            request
                .render()
                .with_context(|| format!("{}: statement #{}", path.display(), i + 1))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestFormat {
    Toml,
    Json,
}

pub fn load_requests(path: &Path) -> anyhow::Result<RequestFile> {
    let format = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => RequestFormat::Toml,
        Some("json") => RequestFormat::Json,
        _ => anyhow::bail!(
            "unsupported request file {} (expected .toml or .json)",
            path.display()
        ),
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read request file {}", path.display()))?;

    let parsed: anyhow::Result<RequestFile> = match format {
        RequestFormat::Toml => toml::from_str(&raw).map_err(anyhow::Error::from),
        RequestFormat::Json => serde_json::from_str(&raw).map_err(anyhow::Error::from),
    };
    parsed.with_context(|| format!("failed to parse request file {}", path.display()))
}

pub fn format_output(
    rendered: &[Rendered],
    format: OutputFormat,
    terminator: &str,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(rendered)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for statement in rendered {
                writeln!(out, "{}{terminator}", statement.query)?;
                if let Some(param) = statement.param.as_ref().filter(|p| !p.is_empty()) {
                    writeln!(out, "-- param: {}", serde_json::to_string(param)?)?;
                }
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUESTS: &str = r#"
[[statement]]
kind = "select"
table = "member"
join_type = "INNER"
join = "country"
on = "member.countryIdx = country.idx"
columns = ["name"]
where = { age = 24 }

[[statement]]
kind = "update"
table = "member"
values = { age = 25 }
where = ["idx = 1"]

[[statement]]
kind = "call"
target = "add_member"
parameters = ["Aiden", 24]
"#;

    fn render_all(file: &RequestFile) -> Vec<Rendered> {
        file.statements
            .iter()
            .map(|request| request.render().unwrap())
            .collect()
    }

    #[test]
    fn renders_toml_requests() {
        let file: RequestFile = toml::from_str(REQUESTS).unwrap();
        let rendered = render_all(&file);

        assert_eq!(rendered.len(), 3);
        assert_eq!(
            rendered[0].query,
            "SELECT name FROM member INNER JOIN country ON member.countryIdx = country.idx WHERE (age = 24)"
        );
        assert_eq!(rendered[1].query, "UPDATE member SET age = 25 WHERE (idx = 1)");
        assert_eq!(rendered[2].query, "CALL add_member(?, ?)");
        assert_eq!(
            rendered[2].param,
            Some(vec![Value::from("Aiden"), Value::Int(24)])
        );
    }

    #[test]
    fn renders_json_requests() {
        let file: RequestFile = serde_json::from_str(
            r#"{"statement": [
                {"kind": "insert", "table": "member",
                 "values": {"name": "Aiden", "dateReg": "\\NOW()"}}
            ]}"#,
        )
        .unwrap();
        let rendered = render_all(&file);
        assert_eq!(
            rendered[0].query,
            r#"INSERT INTO member (name, dateReg) VALUES ("Aiden", NOW())"#
        );
        assert_eq!(rendered[0].param, None);
    }

    #[test]
    fn text_output_with_terminator() {
        let file: RequestFile = toml::from_str(REQUESTS).unwrap();
        let out = format_output(&render_all(&file), OutputFormat::Text, ";").unwrap();
        assert_eq!(
            out,
            "SELECT name FROM member INNER JOIN country ON member.countryIdx = country.idx WHERE (age = 24);\n\
             UPDATE member SET age = 25 WHERE (idx = 1);\n\
             CALL add_member(?, ?);\n\
             -- param: [\"Aiden\",24]\n"
        );
    }

    #[test]
    fn json_output() {
        let rendered = vec![Rendered {
            kind: RequestKind::Call,
            query: "CALL p()".to_string(),
            param: Some(vec![]),
        }];
        let out = format_output(&rendered, OutputFormat::Json, "").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{ "kind": "call", "query": "CALL p()", "param": [] }])
        );
    }

    #[test]
    fn reports_ignored_fields() {
        let request: StatementRequest = toml::from_str(
            r#"
kind = "insert"
table = "member"
values = "age = 24"
limit = 5
parameters = ["x"]
"#,
        )
        .unwrap();
        assert_eq!(request.ignored_fields(), vec!["limit", "parameters"]);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = toml::from_str::<StatementRequest>("kind = \"select\"\ntabel = \"member\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn clause_errors_propagate() {
        let request: StatementRequest =
            toml::from_str("kind = \"update\"\ntable = \"member\"\nvalues = \"age = 24\"\n")
                .unwrap();
        assert_eq!(
            request.render().unwrap_err(),
            clausekit::ClauseError::UpdateConditionMissing
        );
    }

    #[test]
    fn unsupported_extension() {
        let err = load_requests(Path::new("requests.yaml")).unwrap_err();
        assert!(err.to_string().contains("unsupported request file"));

        let err = load_requests(Path::new("missing/requests.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read request file"));
    }
}
