use super::*;

// =============================================================
// normalize_path
// =============================================================

#[test]
fn normalize_keeps_canonical_paths() {
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path("/login"), "/login");
}

#[test]
fn normalize_empty_and_slashes_to_root() {
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("//"), "/");
}

#[test]
fn normalize_strips_trailing_slash_query_and_fragment() {
    assert_eq!(normalize_path("/login/"), "/login");
    assert_eq!(normalize_path("/login?next=/goals"), "/login");
    assert_eq!(normalize_path("/login#form"), "/login");
    assert_eq!(normalize_path("/?x=1"), "/");
}

#[test]
fn normalize_lowercases_and_adds_leading_slash() {
    assert_eq!(normalize_path("/Messages"), "/messages");
    assert_eq!(normalize_path("goals"), "/goals");
}

// =============================================================
// lookup
// =============================================================

#[test]
fn default_table_has_six_routes() {
    let table = RouteTable::default();
    assert_eq!(table.entries().len(), 6);
    assert_eq!(table.root(), "/");
    assert_eq!(table.login(), "/login");
    assert_eq!(table.landing(), "/dashboard");
}

#[test]
fn lookup_root() {
    assert_eq!(RouteTable::default().lookup("/"), Lookup::Root);
}

#[test]
fn lookup_entries_carry_access_and_page() {
    let table = RouteTable::default();
    let Lookup::Entry(entry) = table.lookup("/register") else {
        panic!("expected entry");
    };
    assert_eq!(entry.access, Access::PublicOnly);
    assert_eq!(entry.page, Page::Register);

    let Lookup::Entry(entry) = table.lookup("/messages") else {
        panic!("expected entry");
    };
    assert_eq!(entry.access, Access::Protected);
    assert_eq!(entry.page, Page::Messages);
}

#[test]
fn lookup_unknown_and_nested_paths_are_unmatched() {
    let table = RouteTable::default();
    assert_eq!(table.lookup("/settings"), Lookup::Unmatched);
    assert_eq!(table.lookup("/goals/42"), Lookup::Unmatched);
}

// =============================================================
// validate
// =============================================================

#[test]
fn default_table_is_valid() {
    assert_eq!(RouteTable::default().validate(), Ok(()));
}

#[test]
fn validate_rejects_duplicate_paths() {
    let table = RouteTable::default().with_route("/Goals/", Access::Protected, Page::Goals);
    assert!(matches!(table.validate(), Err(GateError::InvalidTable(msg)) if msg.contains("duplicate")));
}

#[test]
fn validate_rejects_route_shadowing_root() {
    let table = RouteTable::default().with_route("/", Access::Protected, Page::Dashboard);
    assert!(matches!(table.validate(), Err(GateError::InvalidTable(msg)) if msg.contains("root")));
}

#[test]
fn validate_rejects_protected_login_path() {
    let table = RouteTable::new("/", "/dashboard", "/dashboard").with_route("/dashboard", Access::Protected, Page::Dashboard);
    assert!(matches!(table.validate(), Err(GateError::InvalidTable(msg)) if msg.contains("login")));
}

#[test]
fn validate_rejects_missing_landing_route() {
    let table = RouteTable::new("/", "/login", "/home").with_route("/login", Access::PublicOnly, Page::Login);
    assert!(matches!(table.validate(), Err(GateError::InvalidTable(msg)) if msg.contains("landing")));
}

#[test]
fn page_titles_are_distinct() {
    let pages = [Page::Login, Page::Register, Page::Dashboard, Page::Profile, Page::Goals, Page::Messages];
    let titles: HashSet<_> = pages.iter().map(|p| p.title()).collect();
    assert_eq!(titles.len(), pages.len());
}
