use crate::domain::model::CompanyRecord;

/// Last path segment that marks a link-variant page URL.
pub const LINK_PATH_MARKER: &str = "link";

/// Linear scan on `id`. Uniqueness is assumed, not enforced: on duplicate
/// ids the first match wins.
pub fn find_company<'a>(directory: &'a [CompanyRecord], id: &str) -> Option<&'a CompanyRecord> {
    directory.iter().find(|company| company.id == id)
}

/// Extracts the client id from a page path shaped
/// `/{category}/{client-id}/link/`. Empty segments (leading, trailing or
/// repeated slashes) are dropped before matching; any other shape yields
/// None.
pub fn client_id_from_path(path: &str) -> Option<&str> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if segments.len() >= 2 && segments[segments.len() - 1] == LINK_PATH_MARKER {
        Some(segments[segments.len() - 2])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(id: &str, name: &str) -> CompanyRecord {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
    }

    #[test]
    fn test_find_company_present() {
        let directory = vec![company("acme", "Acme Co"), company("pv-energy", "PV Energy")];
        let found = find_company(&directory, "pv-energy").unwrap();
        assert_eq!(found.name, "PV Energy");
    }

    #[test]
    fn test_find_company_absent() {
        let directory = vec![company("acme", "Acme Co")];
        assert!(find_company(&directory, "missing").is_none());
    }

    #[test]
    fn test_find_company_duplicate_ids_first_wins() {
        let directory = vec![company("acme", "First"), company("acme", "Second")];
        assert_eq!(find_company(&directory, "acme").unwrap().name, "First");
    }

    #[test]
    fn test_client_id_from_link_path() {
        assert_eq!(
            client_id_from_path("/construccion/pv-energy/link/"),
            Some("pv-energy")
        );
        assert_eq!(
            client_id_from_path("/construccion/pv-energy/link"),
            Some("pv-energy")
        );
        assert_eq!(
            client_id_from_path("//construccion//pv-energy//link//"),
            Some("pv-energy")
        );
    }

    #[test]
    fn test_client_id_missing_shapes() {
        assert_eq!(client_id_from_path("/link/"), None);
        assert_eq!(client_id_from_path("/"), None);
        assert_eq!(client_id_from_path(""), None);
        assert_eq!(client_id_from_path("/construccion/pv-energy/"), None);
        assert_eq!(client_id_from_path("/construccion/pv-energy/card/"), None);
    }
}
