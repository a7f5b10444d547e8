//! A small model of a generated Java class and its renderer.
//!
//! Emitters build a [`JavaClass`] (or a [`JavaEnum`]) and call `render`. Keeping the
//! model separate from the text lets the wire model in [`crate::wire`] reason
//! about the same annotations the source carries.
//!
//! Layout of a rendered file:
//!
//! ```text
//! package <package>;
//! <blank>
//! <blank>
//! import <a>;        one block per import, sorted
//! <blank>
//! /**
//!  * <description>
//!  */
//! <blank>
//! <class annotations>
//! public class <Name> {
//!     fields, constructors, then a getter and setter per field,
//!     separated by blank lines
//! }
//! ```
//!
//! The file has no trailing newline.

use std::collections::BTreeSet;
use std::fmt;

const INDENT: &str = "    ";

/// Jackson annotations the backend knows how to place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// The annotated field is the whole wire value.
    JsonValue,

    /// The annotated constructor builds an instance from the wire value.
    JsonCreator,

    /// The annotated field is the named JSON property.
    JsonProperty(String),

    /// The annotated field is left out of the output when null.
    JsonIncludeNonNull,

    /// Unknown properties are skipped when reading the annotated class.
    JsonIgnoreUnknown,
}

impl Annotation {
    /// Fully qualified import the annotation needs.
    pub fn import(&self) -> &'static str {
        match self {
            Annotation::JsonValue => "com.fasterxml.jackson.annotation.JsonValue",
            Annotation::JsonCreator => "com.fasterxml.jackson.annotation.JsonCreator",
            Annotation::JsonProperty(_) => "com.fasterxml.jackson.annotation.JsonProperty",
            Annotation::JsonIncludeNonNull => "com.fasterxml.jackson.annotation.JsonInclude",
            Annotation::JsonIgnoreUnknown => {
                "com.fasterxml.jackson.annotation.JsonIgnoreProperties"
            }
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::JsonValue => write!(f, "@JsonValue"),
            Annotation::JsonCreator => write!(f, "@JsonCreator"),
            Annotation::JsonProperty(name) => write!(f, "@JsonProperty(\"{name}\")"),
            Annotation::JsonIncludeNonNull => {
                write!(f, "@JsonInclude(JsonInclude.Include.NON_NULL)")
            }
            Annotation::JsonIgnoreUnknown => {
                write!(f, "@JsonIgnoreProperties(ignoreUnknown = true)")
            }
        }
    }
}

/// A private instance field with a getter and a setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaField {
    /// Javadoc lines for the field and its accessors.
    pub doc: Vec<String>,
    pub annotations: Vec<Annotation>,
    pub type_: String,
    pub name: String,
}

impl JavaField {
    pub fn new(type_: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            doc: Vec::new(),
            annotations: Vec::new(),
            type_: type_.into(),
            name: name.into(),
        }
    }

    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn documented(mut self, description: &str) -> Self {
        self.doc = description.lines().map(str::to_string).collect();
        self
    }

    pub fn has(&self, annotation: &Annotation) -> bool {
        self.annotations.contains(annotation)
    }

    /// The JSON property name: the `@JsonProperty` value, else the field name.
    pub fn property_name(&self) -> &str {
        self.annotations
            .iter()
            .find_map(|a| match a {
                Annotation::JsonProperty(name) => Some(name.as_str()),
                _ => None,
            })
            .unwrap_or(&self.name)
    }

    fn accessor_suffix(&self) -> String {
        polygen_core::naming::capitalize(&self.name)
    }
}

/// A constructor assigning each parameter to the field of the same name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JavaConstructor {
    pub annotations: Vec<Annotation>,

    /// `(type, name)` pairs.
    pub params: Vec<(String, String)>,
}

impl JavaConstructor {
    /// The no-argument constructor.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A constructor taking and assigning one field.
    pub fn assigning(field: &JavaField) -> Self {
        Self {
            annotations: Vec::new(),
            params: vec![(field.type_.clone(), field.name.clone())],
        }
    }

    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaClass {
    pub package: String,

    /// Imports beyond those the annotations need.
    pub imports: BTreeSet<String>,

    pub description: String,
    pub annotations: Vec<Annotation>,
    pub name: String,
    pub fields: Vec<JavaField>,
    pub constructors: Vec<JavaConstructor>,
}

impl JavaClass {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports: BTreeSet::new(),
            description: String::new(),
            annotations: Vec::new(),
            name: name.into(),
            fields: Vec::new(),
            constructors: Vec::new(),
        }
    }

    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn import<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports.extend(imports.into_iter().map(Into::into));
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn field(mut self, field: JavaField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn constructor(mut self, constructor: JavaConstructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Every import of the file, sorted.
    pub fn all_imports(&self) -> BTreeSet<String> {
        let annotations = self
            .annotations
            .iter()
            .chain(self.fields.iter().flat_map(|f| &f.annotations))
            .chain(self.constructors.iter().flat_map(|c| &c.annotations));

        let mut imports = self.imports.clone();
        imports.extend(annotations.map(|a| a.import().to_string()));
        imports
    }

    /// The field marked `@JsonValue`, if any.
    pub fn value_field(&self) -> Option<&JavaField> {
        self.fields.iter().find(|f| f.has(&Annotation::JsonValue))
    }

    /// The constructor marked `@JsonCreator`, if any.
    pub fn creator(&self) -> Option<&JavaConstructor> {
        self.constructors
            .iter()
            .find(|c| c.annotations.contains(&Annotation::JsonCreator))
    }

    /// Render Java source text.
    pub fn render(&self) -> String {
        let mut code = header(&self.package, &self.all_imports(), &self.description);

        code.push('\n');
        for annotation in &self.annotations {
            code.push_str(&format!("{annotation}\n"));
        }
        code.push_str(&format!("public class {} {{\n", self.name));
        code.push_str(&self.render_members().join("\n"));
        code.push('}');

        code
    }

    /// Member blocks, each ending in a newline.
    fn render_members(&self) -> Vec<String> {
        let mut blocks = Vec::new();

        for field in &self.fields {
            let mut block = javadoc(&field.doc);
            for annotation in &field.annotations {
                block.push_str(&format!("{INDENT}{annotation}\n"));
            }
            block.push_str(&format!("{INDENT}private {} {};\n", field.type_, field.name));
            blocks.push(block);
        }

        for constructor in &self.constructors {
            let mut block = String::new();
            for annotation in &constructor.annotations {
                block.push_str(&format!("{INDENT}{annotation}\n"));
            }
            let params: Vec<String> = constructor
                .params
                .iter()
                .map(|(ty, name)| format!("{ty} {name}"))
                .collect();
            block.push_str(&format!(
                "{INDENT}public {}({}) {{\n",
                self.name,
                params.join(", ")
            ));
            for (_, name) in &constructor.params {
                block.push_str(&format!("{INDENT}{INDENT}this.{name} = {name};\n"));
            }
            block.push_str(&format!("{INDENT}}}\n"));
            blocks.push(block);
        }

        for field in &self.fields {
            let suffix = field.accessor_suffix();

            blocks.push(format!(
                "{}{INDENT}public {} get{suffix}() {{\n{INDENT}{INDENT}return {};\n{INDENT}}}\n",
                javadoc(&field.doc),
                field.type_,
                field.name
            ));

            blocks.push(format!(
                "{}{INDENT}public void set{suffix}({} {}) {{\n{INDENT}{INDENT}this.{} = {};\n{INDENT}}}\n",
                javadoc(&field.doc),
                field.type_,
                field.name,
                field.name,
                field.name
            ));
        }

        blocks
    }
}

/// One constant of a [`JavaEnum`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaEnumConstant {
    pub doc: Vec<String>,
    pub name: String,

    /// The string Jackson reads and writes for this constant.
    pub json_value: String,
}

impl JavaEnumConstant {
    pub fn new(name: impl Into<String>, json_value: impl Into<String>) -> Self {
        Self {
            doc: Vec::new(),
            name: name.into(),
            json_value: json_value.into(),
        }
    }

    pub fn documented(mut self, description: &str) -> Self {
        self.doc = description.lines().map(str::to_string).collect();
        self
    }
}

/// A generated enum whose constants are bound to wire strings with
/// `@JsonProperty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaEnum {
    pub package: String,
    pub description: String,
    pub name: String,
    pub constants: Vec<JavaEnumConstant>,
}

impl JavaEnum {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            description: String::new(),
            name: name.into(),
            constants: Vec::new(),
        }
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn constant(mut self, constant: JavaEnumConstant) -> Self {
        self.constants.push(constant);
        self
    }

    /// Render Java source text, laid out like [`JavaClass::render`].
    pub fn render(&self) -> String {
        let imports =
            BTreeSet::from(["com.fasterxml.jackson.annotation.JsonProperty".to_string()]);
        let mut code = header(&self.package, &imports, &self.description);

        code.push_str(&format!("\npublic enum {} {{\n", self.name));
        let constants: Vec<String> = self
            .constants
            .iter()
            .map(|constant| {
                format!(
                    "{}{INDENT}{}\n{INDENT}{}",
                    javadoc(&constant.doc),
                    Annotation::JsonProperty(constant.json_value.clone()),
                    constant.name
                )
            })
            .collect();
        code.push_str(&constants.join(",\n\n"));
        code.push_str("\n}");

        code
    }
}

/// Package line, import blocks and the type's javadoc.
fn header(package: &str, imports: &BTreeSet<String>, description: &str) -> String {
    let mut code = format!("package {package};\n\n");

    for import in imports {
        code.push_str(&format!("\nimport {import};\n"));
    }

    code.push_str("\n/**\n");
    let doc: Vec<String> = description
        .lines()
        .map(|line| format!(" * {line}"))
        .collect();
    code.push_str(&doc.join("\n"));
    code.push_str("\n */\n");

    code
}

/// Indented javadoc block; empty when there are no lines.
fn javadoc(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut block = format!("{INDENT}/**\n");
    for line in lines {
        block.push_str(&format!("{INDENT} * {line}\n"));
    }
    block.push_str(&format!("{INDENT} */\n"));
    block
}
