use super::{GetAll, Header, InvalidContentLength, Iter};
use crate::frame;

const fn is_send_sync<T: Send + Sync>() {}
const _: () = {
    is_send_sync::<Header>();
    is_send_sync::<InvalidContentLength>();
    is_send_sync::<Iter<'static>>();
    is_send_sync::<GetAll<'static>>();
};

#[test]
fn append_preserves_order() {
    let mut header = Header::new();
    header.append("foo", "1");
    header.append("foo", "2");

    assert_eq!(header.get("foo"), Some("1"));
    assert_eq!(header.get_all("foo").collect::<Vec<_>>(), ["1", "2"]);
    assert_eq!(header.len(), 2);
    assert_eq!(header.keys_len(), 1);
}

#[test]
fn insert_replaces_all_values() {
    let mut header = Header::new();
    assert_eq!(header.insert("foo", "1"), None);
    assert_eq!(header.insert("foo", "2"), Some("1".to_owned()));
    assert_eq!(header.get_all("foo").collect::<Vec<_>>(), ["2"]);

    // insert after append drops every duplicate
    header.append("foo", "3");
    assert_eq!(header.insert("foo", "4"), Some("2".to_owned()));
    assert_eq!(header.get_all("foo").collect::<Vec<_>>(), ["4"]);
}

#[test]
fn absent_key() {
    let header = Header::new();
    assert_eq!(header.get("missing"), None);
    assert!(!header.contains_key("missing"));
    assert_eq!(header.get_all("missing").len(), 0);
    assert!(header.is_empty());
}

#[test]
fn empty_value_is_distinct_from_absence() {
    let mut header = Header::new();
    header.append("receipt", "");
    assert_eq!(header.get("receipt"), Some(""));
    assert!(header.contains_key("receipt"));
}

#[test]
fn remove() {
    let mut header = Header::new();
    header.append("foo", "1");
    header.append("foo", "2");

    assert_eq!(header.remove("foo"), Some("1".to_owned()));
    assert!(!header.contains_key("foo"));
    assert_eq!(header.get("foo"), None);
    assert_eq!(header.len(), 0);

    // removing an absent key is a no-op
    assert_eq!(header.remove("foo"), None);
}

#[test]
fn clone_is_independent() {
    let mut header = Header::new();
    header.append("destination", "/queue/a");
    header.append("session", "s-1");

    let mut clone = header.clone();
    assert_eq!(clone, header);

    clone.append("destination", "/queue/b");
    assert_eq!(header.get_all("destination").len(), 1);
    assert_eq!(clone.get_all("destination").len(), 2);

    header.insert("session", "s-2");
    assert_eq!(clone.get("session"), Some("s-1"));
}

#[test]
fn keys_are_case_sensitive() {
    let mut header = Header::new();
    header.append("Content-Length", "5");

    assert_eq!(header.get("content-length"), None);
    assert_eq!(header.get("Content-Length"), Some("5"));

    // the well known name is lowercase, so the typed lookup misses too
    assert_eq!(header.content_length(), Ok(None));
}

#[test]
fn content_length_unspecified() {
    let header = Header::new();
    assert_eq!(header.content_length(), Ok(None));

    let mut header = Header::new();
    header.insert(frame::CONTENT_LENGTH, "");
    assert_eq!(header.content_length(), Ok(None));
}

#[test]
fn content_length_valid() {
    let mut header = Header::new();
    header.insert(frame::CONTENT_LENGTH, "42");
    assert_eq!(header.content_length(), Ok(Some(42)));

    header.insert(frame::CONTENT_LENGTH, "0");
    assert_eq!(header.content_length(), Ok(Some(0)));
}

#[test]
fn content_length_malformed() {
    for text in ["abc", "-1", "12cd", "4294967296"] {
        let mut header = Header::new();
        header.insert(frame::CONTENT_LENGTH, text);

        let err = header.content_length().unwrap_err();
        assert_eq!(err.value(), text);
    }
}

#[test]
fn multi_value_destination() {
    let mut header = Header::new();
    header.append(frame::DESTINATION, "/queue/a");
    header.append(frame::DESTINATION, "/queue/b");

    assert_eq!(header.get(frame::DESTINATION), Some("/queue/a"));
    assert_eq!(header.get_all(frame::DESTINATION).len(), 2);
}

#[test]
fn iter_flattens_pairs_in_insertion_order() {
    let mut header = Header::new();
    header.append("destination", "/queue/a");
    header.append("receipt", "r-1");
    header.append("destination", "/queue/b");

    let pairs = header.iter().collect::<Vec<_>>();
    assert_eq!(
        pairs,
        [
            ("destination", "/queue/a"),
            ("destination", "/queue/b"),
            ("receipt", "r-1"),
        ]
    );
}

#[test]
fn from_iter_appends() {
    let header = Header::from_iter([("foo", "1"), ("bar", "2"), ("foo", "3")]);

    assert_eq!(header.get_all("foo").collect::<Vec<_>>(), ["1", "3"]);
    assert_eq!(header.get("bar"), Some("2"));
    assert_eq!(header.len(), 3);
}

#[test]
fn clear() {
    let mut header = Header::with_capacity(4);
    header.append("foo", "1");
    header.append("bar", "2");

    header.clear();
    assert!(header.is_empty());
    assert_eq!(header.len(), 0);
    assert!(!header.contains_key("foo"));
}
