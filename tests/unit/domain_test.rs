//! Tests for domain metadata

use std::path::Path;

use devmin::Domain;

#[test]
fn every_domain_has_distinct_metadata() {
    let names: Vec<_> = Domain::ALL.iter().map(|d| d.name()).collect();
    assert_eq!(names, ["html", "css", "js"]);

    let labels: Vec<_> = Domain::ALL.iter().map(|d| d.label()).collect();
    assert_eq!(labels, ["HTML", "CSS", "JavaScript"]);
}

#[test]
fn download_names_follow_extension() {
    for domain in Domain::ALL {
        assert_eq!(
            domain.default_file_name(),
            format!("minified.{}", domain.extension())
        );
    }
    assert_eq!(Domain::Script.file_name("bundle"), "bundle.js");
}

#[test]
fn infers_domain_from_extension() {
    assert_eq!(Domain::from_path(Path::new("a/b/index.htm")), Some(Domain::Markup));
    assert_eq!(Domain::from_path(Path::new("theme.CSS")), Some(Domain::Stylesheet));
    assert_eq!(Domain::from_path(Path::new("worker.mjs")), Some(Domain::Script));
    assert_eq!(Domain::from_path(Path::new("README")), None);
    assert_eq!(Domain::from_path(Path::new("data.json")), None);
}

#[test]
fn parses_names_and_aliases() {
    assert_eq!("markup".parse::<Domain>().unwrap(), Domain::Markup);
    assert_eq!("css".parse::<Domain>().unwrap(), Domain::Stylesheet);
    assert_eq!("javascript".parse::<Domain>().unwrap(), Domain::Script);
    assert!("rust".parse::<Domain>().is_err());
}

#[test]
fn serializes_as_short_name() {
    assert_eq!(serde_json::to_string(&Domain::Stylesheet).unwrap(), "\"css\"");
    let parsed: Domain = serde_json::from_str("\"script\"").unwrap();
    assert_eq!(parsed, Domain::Script);
}
