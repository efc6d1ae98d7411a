use crate::{ParseError, Path, PathBuf, Segment};

#[test]
fn parse() {
    assert_eq!(Path::parse("").unwrap(), Path::root());
    assert!(Path::parse("").unwrap().is_root());
    assert_eq!(Path::parse("/foo/bar").unwrap().as_str(), "/foo/bar");
    assert_eq!(Path::parse("foo"), Err(ParseError::NoLeadingSlash));
    assert_eq!(Path::parse("~/foo"), Err(ParseError::NoLeadingSlash));
}

#[test]
fn parse_does_not_validate_segments() {
    // escapes are not decoded and indices are not checked until used
    let path = Path::parse("/a~1b/not-a-number/-/~0").unwrap();
    let segments: Vec<_> = path.segments().collect();
    assert_eq!(segments, ["a~1b", "not-a-number", "-", "~0"]);
}

#[test]
#[should_panic = "path must be empty or start with a slash ('/')"]
fn from_static_panics_without_leading_slash() {
    let _ = Path::from_static("foo");
}

#[test]
fn root() {
    let root = Path::root();
    assert!(root.is_root());
    assert_eq!(root.count(), 0);
    assert_eq!(root.first(), None);
    assert_eq!(root.last(), None);
    assert_eq!(root.split_front(), None);
    assert_eq!(root.split_back(), None);
    assert_eq!(root.parent(), None);
}

#[test]
fn single_slash_is_one_empty_segment() {
    let path = Path::from_static("/");
    assert!(!path.is_root());
    assert_eq!(path.count(), 1);
    assert_eq!(path.first(), Some(Segment::new("")));
    assert_eq!(path.split_back(), Some((Path::root(), Segment::new(""))));
}

#[test]
fn split_front() {
    let path = Path::from_static("/a/b/c");
    let (first, rest) = path.split_front().unwrap();
    assert_eq!(first, "a");
    assert_eq!(rest, "/b/c");
    let (second, rest) = rest.split_front().unwrap();
    assert_eq!(second, "b");
    let (third, rest) = rest.split_front().unwrap();
    assert_eq!(third, "c");
    assert!(rest.is_root());
}

#[test]
fn split_back() {
    let path = Path::from_static("/a/b/-");
    let (parent, last) = path.split_back().unwrap();
    assert_eq!(parent, "/a/b");
    assert!(last.is_next());
    assert_eq!(parent.parent().unwrap(), "/a");
    assert!(parent.parent().unwrap().parent().unwrap().is_root());
}

#[test]
fn first_and_last() {
    let path = Path::from_static("/key/0/-");
    assert_eq!(path.first(), Some(Segment::new("key")));
    assert_eq!(path.last(), Some(Segment::new("-")));
    assert_eq!(path.count(), 3);
}

#[test]
fn path_buf() {
    let mut buf = PathBuf::new();
    assert!(buf.is_root());
    buf.push_back("key");
    buf.push_back("0");
    assert_eq!(buf, "/key/0");
    assert_eq!(buf.pop_back().as_deref(), Some("0"));
    assert_eq!(buf.pop_back().as_deref(), Some("key"));
    assert_eq!(buf.pop_back(), None);
    assert!(buf.is_root());
}

#[test]
fn push_back_does_not_escape() {
    let mut buf = PathBuf::new();
    buf.push_back("a/b");
    assert_eq!(buf.count(), 2);
    assert_eq!(buf, "/a/b");
}

#[test]
fn path_buf_parse() {
    assert_eq!(PathBuf::parse("/x").unwrap(), "/x");
    assert_eq!("/x".parse::<PathBuf>().unwrap(), "/x");
    assert!(PathBuf::try_from("x").unwrap_err().is_no_leading_slash());
    assert!(PathBuf::try_from(String::from("")).unwrap().is_root());
}

#[test]
fn from_segments() {
    let buf = PathBuf::from_segments(["k1", "k2", "k3"]);
    assert_eq!(buf, "/k1/k2/k3");
    assert_eq!(buf.to_string(), "/k1/k2/k3");
    assert_eq!(PathBuf::from_segments(Vec::<String>::new()), "");
}

#[test]
fn to_owned_round_trip() {
    let path = Path::from_static("/a/0");
    let buf = path.to_owned();
    assert_eq!(buf.as_path(), path);
    assert_eq!(*path, buf);
}

#[test]
#[cfg(feature = "json")]
fn serde() {
    let buf: PathBuf = serde_json::from_str("\"/foo/0\"").unwrap();
    assert_eq!(buf, "/foo/0");
    assert_eq!(serde_json::to_string(&buf).unwrap(), "\"/foo/0\"");

    let err = serde_json::from_str::<PathBuf>("\"foo\"").unwrap_err();
    assert!(err.to_string().contains("does not start with a slash"));

    let json = String::from("\"/bar\"");
    let path: &Path = serde_json::from_str(&json).unwrap();
    assert_eq!(path, "/bar");
}
