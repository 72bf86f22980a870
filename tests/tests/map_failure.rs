use pretty_assertions::assert_eq;
use remap::{Mapper, Registry, Shape, Type, Value};
use std::sync::Arc;
use tests::color;

#[test]
fn failing_rule_leaves_earlier_writes_in_place() {
    let mut registry = Registry::new();
    let source = registry.register(
        Shape::builder("Source")
            .member("ID", Type::I32)
            .member("Shade", Type::String),
    );
    let target = registry.register(
        Shape::builder("Target")
            .member("ID", Type::I32)
            .member("Shade", Type::Enum(color())),
    );
    let mapper = Mapper::new(Arc::new(registry));

    let source_record = remap::Record::new(
        source,
        vec![Value::I32(5), Value::from("purple")],
    );
    let mut target_record = mapper.registry().shape(target).new_record();

    // ID maps first in declaration order; the enum parse then fails
    let err = mapper.map(&source_record, &mut target_record).unwrap_err();
    assert!(err.is_conversion());

    // Mapping is not atomic: the first rule's write survives
    assert_eq!(target_record[0], Value::I32(5));
    assert_eq!(target_record[1], Value::Null);
}
