use std::collections::HashMap;
use std::sync::Arc;

use clash_protocol::PokemonData;
use tokio::sync::RwLock;

/// Shared creature cache keyed by every identifier a record answers to
#[derive(Debug, Default)]
pub(crate) struct DexCache {
    entries: RwLock<HashMap<String, Arc<PokemonData>>>,
}

impl DexCache {
    pub async fn get(&self, key: &str) -> Option<Arc<PokemonData>> {
        self.entries.read().await.get(key).cloned()
    }

    /// Store under the lookup key, the numeric id and the lowercase name
    pub async fn insert(&self, key: &str, data: Arc<PokemonData>) {
        let mut entries = self.entries.write().await;
        for alias in [key.to_string(), data.id.to_string(), data.name.to_lowercase()] {
            if !alias.is_empty() {
                entries.insert(alias, Arc::clone(&data));
            }
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clash_protocol::StatBlock;

    fn eevee() -> PokemonData {
        PokemonData {
            id: 133,
            name: "eevee".to_string(),
            types: vec!["normal".to_string()],
            stats: StatBlock::default(),
            abilities: Vec::new(),
            moves: Vec::new(),
            height: 3,
            weight: 65,
            sprite_url: None,
        }
    }

    #[tokio::test]
    async fn test_insert_registers_aliases() {
        let cache = DexCache::default();
        cache.insert("eevee", Arc::new(eevee())).await;

        assert_eq!(cache.len().await, 2);
        let by_id = cache.get("133").await.unwrap();
        let by_name = cache.get("eevee").await.unwrap();
        assert!(Arc::ptr_eq(&by_id, &by_name));
        assert!(cache.get("vaporeon").await.is_none());
    }
}
