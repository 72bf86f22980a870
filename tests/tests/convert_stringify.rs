use pretty_assertions::assert_eq;
use remap::{Type, Value, ValueEnum};
use tests::{color, single_member_pair};

#[test]
fn numbers_render_through_display() {
    let (mapper, source, target) = single_member_pair("V", Type::I32, Type::String);

    let mut record = mapper.registry().shape(source).new_record();
    record[0] = Value::I32(42);

    let mapped = mapper.map_new(&record, target).unwrap();
    assert_eq!(mapped[0], Value::from("42"));
}

#[test]
fn zero_renders_as_a_string_not_as_absence() {
    let (mapper, source, target) = single_member_pair("V", Type::I32, Type::String);

    let mut record = mapper.registry().shape(source).new_record();
    record[0] = Value::I32(0);

    let mapped = mapper.map_new(&record, target).unwrap();
    assert_eq!(mapped[0], Value::from("0"));
}

#[test]
fn null_passes_through_unchanged() {
    // A null source renders as null, for both nullable and non-nullable
    // string targets
    for target_ty in [Type::String, Type::nullable(Type::String)] {
        let (mapper, source, target) = single_member_pair("V", Type::I32, target_ty);

        let record = mapper.registry().shape(source).new_record();

        let mapped = mapper.map_new(&record, target).unwrap();
        assert_eq!(mapped[0], Value::Null);
    }
}

#[test]
fn enums_render_their_variant_name() {
    let (mapper, source, target) =
        single_member_pair("Shade", Type::Enum(color()), Type::String);

    let mut record = mapper.registry().shape(source).new_record();
    record[0] = Value::Enum(ValueEnum::new(2));

    let mapped = mapper.map_new(&record, target).unwrap();
    assert_eq!(mapped[0], Value::from("Blue"));
}

#[test]
fn booleans_render_as_words() {
    let (mapper, source, target) = single_member_pair("Flag", Type::Bool, Type::String);

    let mut record = mapper.registry().shape(source).new_record();
    record[0] = Value::Bool(true);

    let mapped = mapper.map_new(&record, target).unwrap();
    assert_eq!(mapped[0], Value::from("true"));
}
