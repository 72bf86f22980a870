use pretty_assertions::assert_eq;
use remap::{Mapper, NameMatch, Registry, Shape, Type, Value};
use std::sync::Arc;
use tests::World;

#[test]
fn exact_matching_is_case_sensitive() {
    let mut registry = Registry::new();
    let source = registry.register(Shape::builder("Source").member("id", Type::I32));
    let target = registry.register(Shape::builder("Target").member("ID", Type::I32));
    let mapper = Mapper::new(Arc::new(registry));

    let mut record = mapper.registry().shape(source).new_record();
    record[0] = Value::I32(5);

    // `id` does not match `ID` under the default comparer; the member is
    // silently unmapped
    let mapped = mapper.map_new(&record, target).unwrap();
    assert_eq!(mapped[0], Value::Null);
}

#[test]
fn ignore_case_matching_bridges_naming_styles() {
    let mut registry = Registry::new();
    let source = registry.register(Shape::builder("Source").member("id", Type::I32));
    let target = registry.register(Shape::builder("Target").member("ID", Type::I32));
    let mapper = Mapper::new(Arc::new(registry));

    let mapping = mapper
        .mapping(source, target)
        .name_match(NameMatch::IgnoreCase)
        .build()
        .unwrap();

    let mut record = mapper.registry().shape(source).new_record();
    record[0] = Value::I32(5);

    let mapped = mapping.apply_new(&record).unwrap();
    assert_eq!(mapped[0], Value::I32(5));
}

#[test]
fn first_source_member_wins_under_a_loose_comparer() {
    let mut registry = Registry::new();
    let source = registry.register(
        Shape::builder("Source")
            .member("Value", Type::String)
            .member("VALUE", Type::String),
    );
    let target = registry.register(Shape::builder("Target").member("value", Type::String));
    let mapper = Mapper::new(Arc::new(registry));

    let mapping = mapper
        .mapping(source, target)
        .name_match(NameMatch::IgnoreCase)
        .build()
        .unwrap();

    let mut record = mapper.registry().shape(source).new_record();
    record[0] = Value::from("first");
    record[1] = Value::from("second");

    let mapped = mapping.apply_new(&record).unwrap();
    assert_eq!(mapped[0], Value::from("first"));
}

#[test]
fn ignored_source_members_do_not_match() {
    let w = World::new();

    let mapping = w
        .mapper
        .mapping(w.dummy1, w.dummy2)
        .ignore_source("Value")
        .build()
        .unwrap();

    let source = w.record(w.dummy1, vec![Value::I32(5), Value::from("x")]);
    let mapped = mapping.apply_new(&source).unwrap();

    assert_eq!(mapped, w.record(w.dummy2, vec![Value::I32(5), Value::Null]));
}

#[test]
fn explicit_source_override_redirects_the_match() {
    let w = World::new();

    // Dummy3.Extra has no same-named source member; map it from Value
    let mapping = w
        .mapper
        .mapping(w.dummy1, w.dummy3)
        .map_from("Extra", "Value")
        .build()
        .unwrap();

    let source = w.record(w.dummy1, vec![Value::I32(5), Value::from("x")]);
    let mapped = mapping.apply_new(&source).unwrap();

    assert_eq!(
        mapped,
        w.record(w.dummy3, vec![Value::I32(5), Value::from("x")])
    );
}

#[test]
fn reset_restores_default_matching() {
    let w = World::new();

    let mapping = w
        .mapper
        .mapping(w.dummy1, w.dummy2)
        .ignore("Value")
        .reset("Value")
        .build()
        .unwrap();

    let source = w.record(w.dummy1, vec![Value::I32(5), Value::from("x")]);
    let mapped = mapping.apply_new(&source).unwrap();

    assert_eq!(
        mapped,
        w.record(w.dummy2, vec![Value::I32(5), Value::from("x")])
    );
}

#[test]
fn custom_function_override_bypasses_matching() {
    let w = World::new();

    let mapping = w
        .mapper
        .mapping(w.dummy1, w.dummy2)
        .map_with("Value", |source| match &source[0] {
            Value::I32(id) => Value::from(format!("#{id}")),
            _ => Value::Null,
        })
        .build()
        .unwrap();

    let source = w.record(w.dummy1, vec![Value::I32(5), Value::from("ignored")]);
    let mapped = mapping.apply_new(&source).unwrap();

    assert_eq!(
        mapped,
        w.record(w.dummy2, vec![Value::I32(5), Value::from("#5")])
    );
}
