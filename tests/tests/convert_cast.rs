use pretty_assertions::assert_eq;
use remap::{Type, Value};
use tests::single_member_pair;

#[test]
fn widening_integer_cast() {
    let (mapper, source, target) = single_member_pair("N", Type::I32, Type::I64);

    let mut record = mapper.registry().shape(source).new_record();
    record[0] = Value::I32(5);

    let mapped = mapper.map_new(&record, target).unwrap();
    assert_eq!(mapped[0], Value::I64(5));
}

#[test]
fn narrowing_cast_compiles_but_overflows_at_mapping_time() {
    let (mapper, source, target) = single_member_pair("N", Type::I64, Type::I8);

    // The rule is built eagerly for the declared types; values in range map
    let mut record = mapper.registry().shape(source).new_record();
    record[0] = Value::I64(42);
    let mapped = mapper.map_new(&record, target).unwrap();
    assert_eq!(mapped[0], Value::I8(42));

    // The same plan fails for a value out of range
    let mut record = mapper.registry().shape(source).new_record();
    record[0] = Value::I64(1000);
    let err = mapper.map_new(&record, target).unwrap_err();
    assert!(err.is_conversion());
}

#[test]
fn signed_unsigned_cast_checks_sign_at_mapping_time() {
    let (mapper, source, target) = single_member_pair("N", Type::I32, Type::U32);

    let mut record = mapper.registry().shape(source).new_record();
    record[0] = Value::I32(-1);

    let err = mapper.map_new(&record, target).unwrap_err();
    assert!(err.is_conversion());
}

#[test]
fn float_to_integer_truncates() {
    let (mapper, source, target) = single_member_pair("N", Type::F64, Type::I32);

    let mut record = mapper.registry().shape(source).new_record();
    record[0] = Value::F64(3.9);

    let mapped = mapper.map_new(&record, target).unwrap();
    assert_eq!(mapped[0], Value::I32(3));
}

#[test]
fn integer_to_float_widens() {
    let (mapper, source, target) = single_member_pair("N", Type::U8, Type::F64);

    let mut record = mapper.registry().shape(source).new_record();
    record[0] = Value::U8(9);

    let mapped = mapper.map_new(&record, target).unwrap();
    assert_eq!(mapped[0], Value::F64(9.0));
}
