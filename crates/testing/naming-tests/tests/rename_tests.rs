//! Integration tests for batch renaming through the factory

use expect_test::expect;
use naming_tests::{name_each, render, MethodFixture};
use vn_naming::{JadNameProviderFactory, VariableNameProvider, VariableNamingFactory};
use vn_vars::VarVersion;

fn provider_for(fixture: &MethodFixture) -> Box<dyn VariableNameProvider> {
    JadNameProviderFactory::new().create(&fixture.method)
}

#[test]
fn test_whole_method() {
    let fixture = MethodFixture::new("process")
        .var(0, 0, "this")
        .var(1, 0, "java.lang.String[]")
        .var(2, 0, "int")
        .var(2, 1, "int")
        .var(3, 0, "boolean")
        .var(4, 0, "java.util.List<java.lang.String>")
        .var(5, 0, "java.io.File")
        .var(6, 0, "long")
        .var(7, 0, "int")
        .var(8, 0, "int")
        .var(9, 0, "com.example.Widget")
        .var(10, 0, "foo")
        .var(11, 0, "java.lang.Object")
        .var(12, 0, "java.lang.String")
        .var(13, 0, "java.lang.String[][]")
        .var(14, 0, "short")
        .var(15, 0, "char");

    let names = provider_for(&fixture).rename(&fixture.types);
    expect![[r#"
        (1,0) astring
        (2,0) i
        (2,1) j
        (3,0) flag
        (4,0) list
        (5,0) file
        (6,0) k
        (7,0) l
        (8,0) i1
        (9,0) widget
        (10,0) foo
        (11,0) object
        (12,0) s
        (13,0) astring1
        (14,0) short1
        (15,0) c0
    "#]]
    .assert_eq(&render(&names));
}

#[test]
fn test_int_family_rotates() {
    let mut provider = provider_for(&MethodFixture::new("loop"));
    assert_eq!(
        name_each(provider.as_mut(), "int", 5),
        ["i", "j", "k", "l", "i1"]
    );
}

#[test]
fn test_boolean_family() {
    let mut provider = provider_for(&MethodFixture::new("check"));
    assert_eq!(name_each(provider.as_mut(), "boolean", 2), ["flag", "flag1"]);
}

#[test]
fn test_unseen_class_gets_a_family() {
    let mut provider = provider_for(&MethodFixture::new("build"));
    assert_eq!(name_each(provider.as_mut(), "Widget", 2), ["widget", "widget1"]);
}

#[test]
fn test_array_family() {
    let mut provider = provider_for(&MethodFixture::new("main"));
    assert_eq!(
        name_each(provider.as_mut(), "String[]", 2),
        ["astring", "astring1"]
    );
}

#[test]
fn test_receiver_is_never_named() {
    for var in [VarVersion::new(0, 0), VarVersion::new(4, 2)] {
        let fixture = MethodFixture::new("get").var(var.var, var.version, "this");
        let names = provider_for(&fixture).rename(&fixture.types);
        assert!(names.is_empty());
    }
}

#[test]
fn test_rename_is_stateful() {
    let fixture = MethodFixture::new("copy")
        .var(1, 0, "java.lang.String")
        .var(2, 0, "int");
    let mut provider = provider_for(&fixture);

    let first = provider.rename(&fixture.types);
    let second = provider.rename(&fixture.types);
    assert_ne!(first, second);
    expect![[r#"
        (1,0) s
        (2,0) i
    "#]]
    .assert_eq(&render(&first));
    expect![[r#"
        (1,0) s1
        (2,0) j
    "#]]
    .assert_eq(&render(&second));
}

#[test]
fn test_generic_and_qualified_types() {
    let mut provider = provider_for(&MethodFixture::new("list"));
    assert_eq!(
        name_each(provider.as_mut(), "java.util.List<java.lang.String>", 2),
        ["list", "list1"]
    );
    assert_eq!(
        name_each(provider.as_mut(), "java.io.File", 3),
        ["file", "file1", "file2"]
    );
}

#[test]
fn test_same_input_same_output() {
    let fixture = MethodFixture::new("stable")
        .var(3, 0, "int")
        .var(1, 2, "int")
        .var(1, 1, "double")
        .var(2, 0, "Widget");

    let first = render(&provider_for(&fixture).rename(&fixture.types));
    let second = render(&provider_for(&fixture).rename(&fixture.types));
    assert_eq!(first, second);
    expect![[r#"
        (1,1) d0
        (1,2) i
        (2,0) widget
        (3,0) j
    "#]]
    .assert_eq(&first);
}

#[test]
fn test_varargs_types_fall_back_to_empty_names() {
    let fixture = MethodFixture::new("format")
        .var(1, 0, "java.lang.Object...")
        .var(2, 0, "int...")
        .var(3, 0, "java.lang.Object");
    let names = provider_for(&fixture).rename(&fixture.types);

    let issued: Vec<_> = names.values().map(String::as_str).collect();
    // the fallback leaves no family behind, so `Object` still starts fresh
    assert_eq!(issued, ["", "", "object"]);
}

#[test]
fn test_abstract_parameters_keep_their_names() {
    let provider = provider_for(&MethodFixture::new("apply"));
    assert_eq!(provider.rename_abstract_parameter("var2", 2), "var2");
}
