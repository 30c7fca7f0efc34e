// Host-side tests for URL <-> route mapping.

use folio_core::{FolioError, Route};

#[test]
fn parses_known_pages() {
    assert_eq!(Route::parse("/").unwrap(), Route::Home);
    assert_eq!(Route::parse("").unwrap(), Route::Home);
    assert_eq!(Route::parse("/about").unwrap(), Route::About);
    assert_eq!(Route::parse("/projects/").unwrap(), Route::Projects);
    assert_eq!(Route::parse("/contact?x=1").unwrap(), Route::Contact);
    assert_eq!(Route::parse("/tools#top").unwrap(), Route::Tools);
    assert_eq!(Route::parse("/gallery").unwrap(), Route::gallery(None));
    assert_eq!(Route::parse("/gallery/ma").unwrap(), Route::gallery(Some("ma")));
}

#[test]
fn unknown_paths_fall_back_home() {
    assert!(matches!(
        Route::parse("/nope"),
        Err(FolioError::UnknownRoute(_))
    ));
    assert!(Route::parse("/gallery/a/b").is_err());
    assert_eq!(Route::parse_or_home("/nope"), Route::Home);
}

#[test]
fn frame_ids_survive_the_url() {
    let r = Route::gallery(Some("my frame/1"));
    let path = r.to_path();
    assert_eq!(path, "/gallery/my%20frame%2F1");
    assert_eq!(Route::parse(&path).unwrap(), r);
    assert_eq!(r.gallery_frame(), Some("my frame/1"));
}

#[test]
fn malformed_escapes_are_kept_literally() {
    assert_eq!(
        Route::parse("/gallery/a%zz").unwrap(),
        Route::gallery(Some("a%zz"))
    );
    assert_eq!(Route::parse("/gallery/a%4").unwrap(), Route::gallery(Some("a%4")));
}

#[test]
fn page_keys_and_display() {
    assert_eq!(Route::gallery(Some("eoc")).page(), "gallery");
    assert_eq!(Route::Tools.page(), "tools");
    assert_eq!(Route::Home.to_string(), "/");
    assert_eq!(Route::gallery(Some("sd")).to_string(), "/gallery/sd");
    assert_eq!(Route::About.gallery_frame(), None);
}
