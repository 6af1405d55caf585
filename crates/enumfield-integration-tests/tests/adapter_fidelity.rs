//! # Adapter Fidelity
//!
//! Form and serializer adapters agree with the core: choices, coercion,
//! and the integer wire format.

use std::sync::OnceLock;

use enumfield_adapters::{
    ChoiceRepr, EnumChoiceField, EnumField, EnumSerializerField, FormError, SerializerError,
};
use enumfield_core::EnumDefinition;
use serde_json::json;

fn person_status() -> &'static EnumDefinition {
    static DEF: OnceLock<EnumDefinition> = OnceLock::new();
    DEF.get_or_init(|| {
        EnumDefinition::builder("PersonStatus")
            .member("UNBORN", 0)
            .member("ALIVE", 1)
            .member("DEAD", 2)
            .member("REANIMATED", 3)
            .member("VOID", 4)
            .transition(0, [4])
            .transition(1, [0])
            .transition(2, [0, 1])
            .transition(3, [2])
            .build()
            .expect("PersonStatus declaration is valid")
    })
}

fn label_beer() -> &'static EnumDefinition {
    static DEF: OnceLock<EnumDefinition> = OnceLock::new();
    DEF.get_or_init(|| {
        EnumDefinition::builder("LabelBeer")
            .member("STELLA", 0)
            .member("JUPILER", 1)
            .member("TYSKIE", 2)
            .label(0, "Stella Artois")
            .label(2, "Browar Tyskie")
            .build()
            .expect("LabelBeer declaration is valid")
    })
}

#[test]
fn model_form_submission_goes_through_holder() {
    let field = EnumField::new(person_status()).with_default(enumfield_adapters::FieldDefault::Value(1));
    let form = field.form_field();
    let mut person = field.holder().unwrap();

    let cleaned = form.clean("2").unwrap().expect("required field yields a member");
    person.assign(cleaned).unwrap();
    assert_eq!(person.value(), Some(2));

    assert!(matches!(
        form.clean("99"),
        Err(FormError::InvalidChoice { .. })
    ));
}

#[test]
fn form_initial_selection() {
    let form = EnumChoiceField::new(person_status());
    let options = form.options(person_status().get("DEAD"));
    let selected: Vec<&str> = options
        .iter()
        .filter(|o| o.selected)
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(selected, vec!["2"]);
    assert_eq!(form.choices(), person_status().choices(false));
}

#[test]
fn optional_form_selects_blank() {
    let form = EnumChoiceField::new(person_status()).required(false);
    assert_eq!(form.choices(), person_status().choices(true));
    let options = form.options(None::<i64>);
    assert!(options[0].selected);
    assert_eq!(form.clean("").unwrap(), None);
}

#[test]
fn blank_field_labels() {
    let state = EnumDefinition::builder("BeerState")
        .member("FIZZY", 0)
        .member("STALE", 1)
        .member("EMPTY", 2)
        .build()
        .unwrap();
    let required = EnumField::new(&state);
    let labels: Vec<&str> = required.choices().iter().map(|c| c.label()).collect();
    assert_eq!(labels, vec!["FIZZY", "STALE", "EMPTY"]);

    let optional = EnumField::new(&state).nullable(true).blank(true);
    let labels: Vec<&str> = optional.choices().iter().map(|c| c.label()).collect();
    assert_eq!(labels, vec!["", "FIZZY", "STALE", "EMPTY"]);
}

#[test]
fn options_serialize_for_templates() {
    let form = EnumChoiceField::new(label_beer());
    let options = form.options(Some(0));
    let rendered = serde_json::to_value(&options).unwrap();
    assert_eq!(
        rendered[0],
        json!({"value": "0", "label": "Stella Artois", "selected": true})
    );
}

#[test]
fn serializer_round_trip_by_value_and_name() {
    let by_value = EnumSerializerField::new(label_beer());
    let by_name = EnumSerializerField::new(label_beer()).with_repr(ChoiceRepr::Name);

    for member in label_beer().members() {
        let as_value = by_value.to_representation(member).unwrap();
        let as_name = by_name.to_representation(member).unwrap();
        assert_eq!(as_value, json!(member.value()));
        assert_eq!(as_name, json!(member.name()));
        assert_eq!(by_value.to_internal_value(&as_value), Ok(member.value()));
        assert_eq!(by_name.to_internal_value(&as_name), Ok(member.value()));
    }
}

#[test]
fn serializer_skip_versus_invalid() {
    let required = EnumSerializerField::new(label_beer());
    let optional = EnumSerializerField::new(label_beer()).required(false);
    assert!(matches!(
        required.to_internal_value(&json!("7")),
        Err(SerializerError::InvalidChoice { .. })
    ));
    assert_eq!(
        optional.to_internal_value(&json!("7")),
        Err(SerializerError::Skip)
    );
}

#[test]
fn member_serializes_as_wire_integer() {
    let payload = json!({ "status": person_status().get("DEAD") });
    assert_eq!(payload, json!({ "status": 2 }));
}
