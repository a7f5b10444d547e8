#![allow(non_snake_case)]

use super::*;

fn field(name: &str, annotation: &str) -> PyField {
    PyField {
        name: name.into(),
        json_name: name.into(),
        annotation: annotation.into(),
        description: String::new(),
        optional: false,
    }
}

fn transparent_root() -> PyClass {
    let value = PyField {
        description: WRAPPED_VALUE_DOC.into(),
        ..field("value", "Optional[str]")
    };
    PyClass::new("Root", Shape::Transparent).field(value)
}

#[test]
fn PyClass___render___transparent_class_layout() {
    let expected = r#"@dataclass
class Root:
    """

    """

    value: "Optional[str]"
    """
    The value being wrapped.
    """

    @classmethod
    def from_json(cls, data) -> "Root":
        """
        Construct an instance of this class from parsed JSON data.
        """

        return cls(_from_json(Optional[str], data))

    def to_json(self):
        """
        Generate JSON-ready data from an instance of this class.
        """

        return _to_json(self.value)
"#;

    assert_eq!(transparent_root().render(), expected);
}

#[test]
fn PyClass___render___record_reads_and_writes_properties() {
    let nickname = PyField {
        optional: true,
        ..field("nickname", "Optional[str]")
    };
    let display = PyField {
        json_name: "displayName".into(),
        ..field("display_name", "str")
    };
    let code = PyClass::new("Person", Shape::Record)
        .described("A person.")
        .field(display)
        .field(nickname)
        .render();

    assert!(code.starts_with("@dataclass\nclass Person:\n    \"\"\"\n    A person.\n    \"\"\"\n"));
    assert!(code.contains("    display_name: \"str\"\n"));
    assert!(code.contains("            _from_json(str, data[\"displayName\"]),\n"));
    assert!(code.contains("            _from_json(Optional[str], data.get(\"nickname\")),\n"));
    assert!(code.contains("        data[\"displayName\"] = _to_json(self.display_name)\n"));
    assert!(code.contains(
        "        if self.nickname is not None:\n            data[\"nickname\"] = _to_json(self.nickname)\n"
    ));
    assert!(code.ends_with("        return data\n"));
}

#[test]
fn PyClass___render___record_without_fields_has_empty_constructor_call() {
    let code = PyClass::new("Empty", Shape::Record).render();

    assert!(code.contains("        return cls(\n        )\n"));
    assert!(code.contains("        data = {}\n        return data\n"));
}

#[test]
fn PyClass___render___escapes_json_keys() {
    let quoted = PyField {
        json_name: "say \"hi\"".into(),
        ..field("say_hi", "str")
    };

    let code = PyClass::new("Greeting", Shape::Record).field(quoted).render();

    assert!(code.contains("data[\"say \\\"hi\\\"\"]"));
}

#[test]
fn PyEnum___render___members_carry_wire_strings() {
    let expected = r#"class Color(Enum):
    """
    A color.
    """

    LIGHT_BLUE = "light-blue"
    """

    """

    RED = "red"
    """
    Warm.
    """

    @classmethod
    def from_json(cls, data) -> "Color":
        """
        Construct an instance of this class from parsed JSON data.
        """

        return cls(data)

    def to_json(self):
        """
        Generate JSON-ready data from an instance of this class.
        """

        return self.value
"#;
    let class = PyEnum::new("Color")
        .described("A color.")
        .member(PyMember {
            name: "LIGHT_BLUE".into(),
            value: "light-blue".into(),
            description: String::new(),
        })
        .member(PyMember {
            name: "RED".into(),
            value: "red".into(),
            description: "Warm.".into(),
        });

    assert_eq!(class.render(), expected);
}

#[test]
fn module___starts_with_preamble_and_helpers() {
    let code = module([]);

    assert!(code.starts_with("from dataclasses import dataclass\n"));
    assert!(code.contains("from enum import Enum\n"));
    assert!(code.contains("\ndef _from_json(cls, data):\n"));
    assert!(code.contains("\ndef _to_json(data):\n"));
    assert!(code.contains("datetime.fromisoformat"));
    assert!(code.contains("if get_origin(cls) is list:"));
    assert!(code.contains("if type(data) is dict:"));
}

#[test]
fn module___classes_follow_helpers_in_order() {
    let code = module(["class A:\n    pass\n", "class B:\n    pass\n"]);

    let a = code.find("class A:").unwrap();
    let b = code.find("class B:").unwrap();
    let helpers = code.find("def _to_json").unwrap();
    assert!(helpers < a && a < b);
    assert!(code.contains("    return data.to_json()\n\n\nclass A:"));
}
