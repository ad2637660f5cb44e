use crate::api::client::MatchDataClient;
use crate::api::models::DataDragonChampions;
use crate::error::AppError;
use std::collections::HashMap;

/// Champion id the ACS source uses for an empty ban slot.
pub const NO_PICK_ID: i64 = -1;
pub const NO_PICK_NAME: &str = "(無)";

/// Read-only `champion id -> display name` table, built once per run.
#[derive(Debug, Clone)]
pub struct ChampionDirectory {
    names: HashMap<i64, String>,
}

impl ChampionDirectory {
    /// Latest Data Dragon version first, then that version's champion list.
    pub fn load(client: &MatchDataClient) -> Result<Self, AppError> {
        let version = client.get_latest_version()?;
        let champions = client.get_champion_list(&version)?;
        Self::from_champion_list(champions)
    }

    pub fn from_champion_list(champions: DataDragonChampions) -> Result<Self, AppError> {
        if champions.data.is_empty() {
            return Err(AppError::LookupFailure("champion list is empty".to_string()));
        }

        let mut names = HashMap::with_capacity(champions.data.len() + 1);
        for (internal_name, info) in champions.data {
            let id: i64 = info.key.parse().map_err(|_| {
                AppError::LookupFailure(format!(
                    "champion {} has non-numeric key {:?}",
                    internal_name, info.key
                ))
            })?;
            names.insert(id, info.name);
        }
        names.insert(NO_PICK_ID, NO_PICK_NAME.to_string());

        Ok(ChampionDirectory { names })
    }

    pub fn resolve(&self, id: i64) -> Result<&str, AppError> {
        self.names
            .get(&id)
            .map(String::as_str)
            .ok_or(AppError::UnknownChampionId(id))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

#[cfg(test)]
pub(crate) fn directory_from_pairs(pairs: &[(i64, &str)]) -> ChampionDirectory {
    use crate::api::models::ChampionInfo;

    let data = pairs
        .iter()
        .map(|(id, name)| {
            (
                format!("Champ{}", id),
                ChampionInfo {
                    name: name.to_string(),
                    key: id.to_string(),
                },
            )
        })
        .collect();
    ChampionDirectory::from_champion_list(DataDragonChampions { data }).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_from_champion_json() {
        let doc: DataDragonChampions = serde_json::from_value(serde_json::json!({
            "type": "champion",
            "data": {
                "Annie": {"id": "Annie", "key": "1", "name": "安妮"},
                "Olaf": {"id": "Olaf", "key": "2", "name": "歐拉夫"}
            }
        }))
        .unwrap();
        let directory = ChampionDirectory::from_champion_list(doc).unwrap();
        assert_eq!(directory.resolve(1).unwrap(), "安妮");
        assert_eq!(directory.resolve(2).unwrap(), "歐拉夫");
        assert_eq!(directory.len(), 3);
    }

    #[test]
    fn test_no_pick_sentinel_always_resolves() {
        let directory = directory_from_pairs(&[(1, "Annie")]);
        assert_eq!(directory.resolve(NO_PICK_ID).unwrap(), "(無)");
    }

    #[test]
    fn test_unknown_id_fails_loudly() {
        let directory = directory_from_pairs(&[(1, "Annie")]);
        assert!(matches!(directory.resolve(999), Err(AppError::UnknownChampionId(999))));
    }

    #[test]
    fn test_empty_list_is_lookup_failure() {
        let doc = DataDragonChampions { data: HashMap::new() };
        assert!(matches!(
            ChampionDirectory::from_champion_list(doc),
            Err(AppError::LookupFailure(_))
        ));
    }

    #[test]
    fn test_non_numeric_key_is_lookup_failure() {
        let doc: DataDragonChampions = serde_json::from_value(serde_json::json!({
            "data": {"Annie": {"id": "Annie", "key": "one", "name": "Annie"}}
        }))
        .unwrap();
        assert!(matches!(
            ChampionDirectory::from_champion_list(doc),
            Err(AppError::LookupFailure(_))
        ));
    }
}
