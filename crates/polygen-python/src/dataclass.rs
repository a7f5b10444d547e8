//! Rendering of `@dataclass` and `Enum` classes and the module holding them.
//!
//! Every class of a run lives in one module, after a shared preamble of
//! imports and the `_from_json`/`_to_json` helpers. Annotations are quoted and
//! the helpers resolve names only when called, so records may refer to
//! themselves or each other in any order.

use crate::imports::ImportSet;

const INDENT: &str = "    ";

const FROM_JSON_DOC: &str = "Construct an instance of this class from parsed JSON data.";
const TO_JSON_DOC: &str = "Generate JSON-ready data from an instance of this class.";

/// Docstring of the single attribute of a transparent class.
pub const WRAPPED_VALUE_DOC: &str = "The value being wrapped.";

const HELPERS: &str = r#"def _from_json(cls, data):
    if data is None or cls in [bool, int, float, str] or cls is Any:
        return data
    if cls is datetime:
        return datetime.fromisoformat(data.replace("Z", "+00:00"))
    if get_origin(cls) is Union:
        return _from_json(get_args(cls)[0], data)
    if get_origin(cls) is list:
        return [_from_json(get_args(cls)[0], d) for d in data]
    if get_origin(cls) is dict:
        return { k: _from_json(get_args(cls)[1], v) for k, v in data.items() }
    return cls.from_json(data)

def _to_json(data):
    if data is None or type(data) in [bool, int, float, str]:
        return data
    if type(data) is datetime:
        return data.isoformat()
    if type(data) is list:
        return [_to_json(d) for d in data]
    if type(data) is dict:
        return { k: _to_json(v) for k, v in data.items() }
    return data.to_json()
"#;

/// Render a module: the preamble, the helpers, then each class in order.
pub fn module<'a, I>(classes: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut code = ImportSet::preamble().render();
    code.push('\n');
    code.push_str(HELPERS);

    for class in classes {
        code.push_str("\n\n");
        code.push_str(class);
    }

    code
}

/// One attribute of a dataclass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyField {
    pub name: String,
    pub json_name: String,
    pub annotation: String,
    pub description: String,

    /// Absent from the JSON object when `None`.
    pub optional: bool,
}

/// Whether a class is the bare value on the wire or an object of properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Transparent,
    Record,
}

/// A dataclass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyClass {
    pub name: String,
    pub description: String,
    pub shape: Shape,
    pub fields: Vec<PyField>,
}

impl PyClass {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            shape,
            fields: Vec::new(),
        }
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn field(mut self, field: PyField) -> Self {
        self.fields.push(field);
        self
    }

    /// Render the class source, without module preamble.
    pub fn render(&self) -> String {
        let mut code = format!("@dataclass\nclass {}:\n", self.name);
        code.push_str(&docstring(INDENT, &self.description));

        for field in &self.fields {
            code.push('\n');
            code.push_str(&format!("{INDENT}{}: \"{}\"\n", field.name, field.annotation));
            code.push_str(&docstring(INDENT, &field.description));
        }

        code.push('\n');
        code.push_str(&self.render_from_json());
        code.push('\n');
        code.push_str(&self.render_to_json());

        code
    }

    fn render_from_json(&self) -> String {
        let body = format!("{INDENT}{INDENT}");
        let mut code = from_json_header(&self.name);

        match (self.shape, self.fields.as_slice()) {
            (Shape::Transparent, [field]) => {
                code.push_str(&format!(
                    "{body}return cls(_from_json({}, data))\n",
                    field.annotation
                ));
            }
            _ => {
                code.push_str(&format!("{body}return cls(\n"));
                for field in &self.fields {
                    let key = py_string(&field.json_name);
                    let value = if field.optional {
                        format!("data.get({key})")
                    } else {
                        format!("data[{key}]")
                    };
                    code.push_str(&format!(
                        "{body}{INDENT}_from_json({}, {value}),\n",
                        field.annotation
                    ));
                }
                code.push_str(&format!("{body})\n"));
            }
        }

        code
    }

    fn render_to_json(&self) -> String {
        let body = format!("{INDENT}{INDENT}");
        let mut code = to_json_header();

        match (self.shape, self.fields.as_slice()) {
            (Shape::Transparent, [field]) => {
                code.push_str(&format!("{body}return _to_json(self.{})\n", field.name));
            }
            _ => {
                code.push_str(&format!("{body}data = {{}}\n"));
                for field in &self.fields {
                    let assign = format!(
                        "data[{}] = _to_json(self.{})\n",
                        py_string(&field.json_name),
                        field.name
                    );
                    if field.optional {
                        code.push_str(&format!("{body}if self.{} is not None:\n", field.name));
                        code.push_str(&format!("{body}{INDENT}{assign}"));
                    } else {
                        code.push_str(&format!("{body}{assign}"));
                    }
                }
                code.push_str(&format!("{body}return data\n"));
            }
        }

        code
    }
}

/// One member of a [`PyEnum`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyMember {
    pub name: String,
    pub value: String,
    pub description: String,
}

/// An `Enum` whose members are the JSON strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyEnum {
    pub name: String,
    pub description: String,
    pub members: Vec<PyMember>,
}

impl PyEnum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            members: Vec::new(),
        }
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn member(mut self, member: PyMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn render(&self) -> String {
        let body = format!("{INDENT}{INDENT}");
        let mut code = format!("class {}(Enum):\n", self.name);
        code.push_str(&docstring(INDENT, &self.description));

        for member in &self.members {
            code.push('\n');
            code.push_str(&format!(
                "{INDENT}{} = {}\n",
                member.name,
                py_string(&member.value)
            ));
            code.push_str(&docstring(INDENT, &member.description));
        }

        code.push('\n');
        code.push_str(&from_json_header(&self.name));
        code.push_str(&format!("{body}return cls(data)\n"));
        code.push('\n');
        code.push_str(&to_json_header());
        code.push_str(&format!("{body}return self.value\n"));

        code
    }
}

fn from_json_header(name: &str) -> String {
    let mut code =
        format!("{INDENT}@classmethod\n{INDENT}def from_json(cls, data) -> \"{name}\":\n");
    code.push_str(&docstring(&format!("{INDENT}{INDENT}"), FROM_JSON_DOC));
    code.push('\n');
    code
}

fn to_json_header() -> String {
    let mut code = format!("{INDENT}def to_json(self):\n");
    code.push_str(&docstring(&format!("{INDENT}{INDENT}"), TO_JSON_DOC));
    code.push('\n');
    code
}

/// A triple-quoted docstring; an empty description leaves one blank line.
fn docstring(indent: &str, text: &str) -> String {
    let mut doc = format!("{indent}\"\"\"\n");
    if text.is_empty() {
        doc.push('\n');
    }
    for line in text.lines() {
        doc.push_str(&format!("{indent}{line}\n"));
    }
    doc.push_str(&format!("{indent}\"\"\"\n"));
    doc
}

/// A double-quoted Python string literal.
fn py_string(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('"');
    for c in text.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

#[cfg(test)]
#[path = "dataclass/dataclass_tests.rs"]
mod dataclass_tests;
