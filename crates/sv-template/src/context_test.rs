use super::*;

#[test]
fn test_context_exposes_version_parts() {
    let ctx = eval_context(&Version::parse("4.5.6-rc.2").unwrap());
    assert_eq!(ctx.get_attr("major").unwrap().as_i64(), Some(4));
    assert_eq!(ctx.get_attr("minor").unwrap().as_i64(), Some(5));
    assert_eq!(ctx.get_attr("patch").unwrap().as_i64(), Some(6));
    assert_eq!(ctx.get_attr("label").unwrap().as_str(), Some("rc.2"));
    assert_eq!(ctx.get_attr("version").unwrap().as_str(), Some("4.5.6-rc.2"));
}

#[test]
fn test_context_exposes_bucket_names() {
    let ctx = eval_context(&Version::new(1, 0, 0));
    assert_eq!(ctx.get_attr("always").unwrap().as_str(), Some("always"));
    assert_eq!(ctx.get_attr("before").unwrap().as_str(), Some("before"));
    assert_eq!(ctx.get_attr("label").unwrap().as_str(), Some(""));
}
