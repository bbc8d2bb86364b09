use std::fmt::Display;

use fixture::{Accessors, Describe};

#[derive(Accessors, Describe)]
struct Course {
    #[readonly]
    code: u32,
    title: String,
    credits: f32,
    #[skip]
    seats: usize,
}

#[derive(Accessors, Describe)]
struct Tagged<T: Display> {
    tag: T,
    active: bool,
}

#[derive(Describe)]
struct Empty {}

#[derive(Accessors, Describe)]
struct Item {
    r#type: u8,
}

#[test]
fn readonly_field_has_getter() {
    let course = Course {
        code: 101,
        title: "Algebra".to_owned(),
        credits: 2.5,
        seats: 30,
    };

    assert_eq!(course.code(), 101);
    assert_eq!(course.title(), "Algebra");
    assert_eq!(course.credits(), 2.5);
    // Skipped field is still a plain field.
    assert_eq!(course.seats, 30);
}

#[test]
fn setters_update_single_field() {
    let mut course = Course {
        code: 7,
        title: String::new(),
        credits: 1.0,
        seats: 5,
    };

    course.set_title("Geometry".to_owned());
    course.set_credits(3.0);

    assert_eq!(course.code(), 7);
    assert_eq!(course.title(), "Geometry");
    assert_eq!(course.credits(), 3.0);
}

#[test]
fn describe_lists_every_field() {
    let course = Course {
        code: 3,
        title: "Logic".to_owned(),
        credits: 1.5,
        seats: 12,
    };

    assert_eq!(
        course.to_string(),
        "Course [code=3, title=Logic, credits=1.5, seats=12]"
    );
}

#[test]
fn generic_struct() {
    let mut tagged = Tagged {
        tag: "a-b".to_owned(),
        active: false,
    };

    assert_eq!(tagged.tag(), "a-b");
    tagged.set_active(true);
    assert!(tagged.active());

    assert_eq!(tagged.to_string(), "Tagged [tag=a-b, active=true]");
}

#[test]
fn describe_empty_struct() {
    assert_eq!(Empty {}.to_string(), "Empty []");
}

#[test]
fn raw_identifier_field() {
    let mut item = Item { r#type: 3 };

    assert_eq!(item.to_string(), "Item [type=3]");

    item.set_type(4);
    assert_eq!(item.r#type(), 4);
}
