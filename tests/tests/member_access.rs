use pretty_assertions::assert_eq;
use remap::{get_fn, set_fn, Mapper, Projection, Record, Registry, Shape, Type, Value};
use std::sync::Arc;

#[test]
fn virtual_source_members_feed_auto_matching() {
    let mut registry = Registry::new();
    let source = registry.register(
        Shape::builder("Source")
            .member("First", Type::String)
            .member("Last", Type::String)
            .virtual_member(
                "Display",
                Type::String,
                Some(get_fn(|record| match (&record[0], &record[1]) {
                    (Value::String(first), Value::String(last)) => {
                        Value::from(format!("{first} {last}"))
                    }
                    _ => Value::Null,
                })),
                None,
            ),
    );
    let target = registry.register(Shape::builder("Target").member("Display", Type::String));
    let mapper = Mapper::new(Arc::new(registry));

    let record = Record::new(source, vec![Value::from("Ada"), Value::from("Lovelace"), Value::Null]);

    let mapped = mapper.map_new(&record, target).unwrap();
    assert_eq!(mapped[0], Value::from("Ada Lovelace"));
}

#[test]
fn write_only_virtual_target_members_receive_values() {
    let mut registry = Registry::new();
    let source = registry.register(Shape::builder("Source").member("Total", Type::I32));
    let target = registry.register(
        Shape::builder("Target")
            .member("Stored", Type::I32)
            .virtual_member(
                "Total",
                Type::I32,
                None,
                Some(set_fn(|record, value| record[0] = value)),
            ),
    );
    let mapper = Mapper::new(Arc::new(registry));

    let record = Record::new(source, vec![Value::I32(7)]);

    let mapped = mapper.map_new(&record, target).unwrap();
    assert_eq!(mapped[0], Value::I32(7));
}

#[test]
fn accessor_paths_read_nested_records() {
    let mut registry = Registry::new();
    let address = registry.register(
        Shape::builder("Address")
            .member("Street", Type::String)
            .member("City", Type::String),
    );
    let person = registry.register(
        Shape::builder("Person")
            .member("Name", Type::String)
            .member("Home", Type::Record(address)),
    );
    let card = registry.register(
        Shape::builder("Card")
            .member("Name", Type::String)
            .member("City", Type::String),
    );
    let mapper = Mapper::new(Arc::new(registry));

    let mapping = mapper
        .mapping(person, card)
        .map_path("City", [1, 1])
        .build()
        .unwrap();

    let home = Record::new(address, vec![Value::from("Main St"), Value::from("London")]);
    let record = Record::new(person, vec![Value::from("Ada"), Value::Record(home)]);

    let mapped = mapping.apply_new(&record).unwrap();
    assert_eq!(mapped[0], Value::from("Ada"));
    assert_eq!(mapped[1], Value::from("London"));
}

#[test]
fn accessors_fail_for_capabilities_a_member_lacks() {
    let mut registry = Registry::new();
    let shape = registry.register(
        Shape::builder("Mixed")
            .member("Slot", Type::I32)
            .virtual_member(
                "WriteOnly",
                Type::I32,
                None,
                Some(set_fn(|record, value| record[0] = value)),
            )
            .path_member("ReadOnly", Type::I32, Projection::field(0)),
    );
    let registry = Arc::new(registry);
    let shape = registry.shape(shape);

    // Slot members resolve both accessors
    assert!(shape.member(0).getter().is_ok());
    assert!(shape.member(0).setter().is_ok());

    // Getter from a write-only member
    let err = shape.member(1).getter().unwrap_err();
    assert!(err.is_unsupported_operation());

    // Setter from a read-only member
    let err = shape.member(2).setter().unwrap_err();
    assert!(err.is_unsupported_operation());
}

#[test]
fn member_equality_tracks_accessor_identity() {
    let mut registry = Registry::new();

    let get = get_fn(|_| Value::I32(1));
    let a = registry.register(Shape::builder("A").virtual_member(
        "X",
        Type::I32,
        Some(get.clone()),
        None,
    ));
    let b = registry.register(Shape::builder("B").virtual_member(
        "X",
        Type::I32,
        Some(get),
        None,
    ));

    let registry = Arc::new(registry);
    let member_a = registry.shape(a).member(0);
    let member_b = registry.shape(b).member(0);

    // Same name, same closure, different owning shapes
    assert_ne!(member_a, member_b);
    assert_eq!(member_a, &member_a.clone());
}
