//! Three-way key diff between existing entities and incoming inputs.
//!
//! `BatchUpdater` keys both collections once at construction and then answers
//! which keys should be created, updated in place, or removed. Inputs without a
//! key are treated as new records and receive a synthetic UUID v4 key that is
//! never equal to an entity key.

use serde::Serialize;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::convert::Infallible;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub to_create: Vec<String>,
    pub to_update: Vec<String>,
    pub to_remove: Vec<String>,
}

/// Map that remembers the order in which keys were first seen.
#[derive(Debug, Clone)]
struct KeyedMap<V> {
    order: Vec<String>,
    values: HashMap<String, V>,
}

impl<V> KeyedMap<V> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            values: HashMap::with_capacity(capacity),
        }
    }

    fn insert(&mut self, key: String, value: V) {
        match self.values.entry(key) {
            Entry::Occupied(mut slot) => {
                slot.insert(value);
            }
            Entry::Vacant(slot) => {
                self.order.push(slot.key().clone());
                slot.insert(value);
            }
        }
    }

    fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<&V> {
        self.values.get(key)
    }

    fn keys(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

#[derive(Debug, Clone)]
pub struct BatchUpdater<E, I> {
    entities: KeyedMap<E>,
    inputs: KeyedMap<I>,
}

impl<E, I> BatchUpdater<E, I> {
    /// Keys `entities` and `inputs` with the given accessors.
    ///
    /// When two values share a key the later one wins. Inputs whose accessor
    /// returns `None` get a fresh synthetic key and always classify as
    /// "to be created".
    pub fn new<EK, IK>(
        entities: impl IntoIterator<Item = E>,
        mut entity_key: EK,
        inputs: impl IntoIterator<Item = I>,
        mut input_key: IK,
    ) -> Self
    where
        EK: FnMut(&E) -> String,
        IK: FnMut(&I) -> Option<String>,
    {
        let built = Self::try_new(
            entities,
            |entity: &E| Ok::<String, Infallible>(entity_key(entity)),
            inputs,
            |input: &I| Ok::<Option<String>, Infallible>(input_key(input)),
        );
        match built {
            Ok(updater) => updater,
            Err(never) => match never {},
        }
    }

    /// Fallible variant of [`BatchUpdater::new`].
    ///
    /// The first accessor error stops construction and is returned as-is.
    pub fn try_new<X, EK, IK>(
        entities: impl IntoIterator<Item = E>,
        mut entity_key: EK,
        inputs: impl IntoIterator<Item = I>,
        mut input_key: IK,
    ) -> std::result::Result<Self, X>
    where
        EK: FnMut(&E) -> std::result::Result<String, X>,
        IK: FnMut(&I) -> std::result::Result<Option<String>, X>,
    {
        let entities = entities.into_iter();
        let mut entity_map = KeyedMap::with_capacity(entities.size_hint().0);
        for entity in entities {
            let key = entity_key(&entity)?;
            if entity_map.contains_key(&key) {
                warn!(key = %key, "duplicate entity key, keeping the later entity");
            }
            entity_map.insert(key, entity);
        }

        let inputs = inputs.into_iter();
        let mut input_map = KeyedMap::with_capacity(inputs.size_hint().0);
        for input in inputs {
            let key = match input_key(&input)? {
                Some(key) => {
                    if input_map.contains_key(&key) {
                        warn!(key = %key, "duplicate input key, keeping the later input");
                    }
                    key
                }
                None => synthetic_key(&entity_map, &input_map),
            };
            input_map.insert(key, input);
        }

        debug!(
            entities = entity_map.len(),
            inputs = input_map.len(),
            "batch updater keyed both collections"
        );

        Ok(Self {
            entities: entity_map,
            inputs: input_map,
        })
    }

    /// Entity keys that no input refers to, in entity order.
    pub fn ids_to_remove(&self) -> Vec<String> {
        self.entities
            .keys()
            .filter(|key| !self.inputs.contains_key(key))
            .cloned()
            .collect()
    }

    /// Keys present on both sides, in entity order.
    pub fn ids_to_be_updated(&self) -> Vec<String> {
        self.entities
            .keys()
            .filter(|key| self.inputs.contains_key(key))
            .cloned()
            .collect()
    }

    /// Input keys with no matching entity, synthetic keys included, in input order.
    pub fn ids_to_be_created(&self) -> Vec<String> {
        self.inputs
            .keys()
            .filter(|key| !self.entities.contains_key(key))
            .cloned()
            .collect()
    }

    pub fn reconciliation(&self) -> Reconciliation {
        let reconciliation = Reconciliation {
            to_create: self.ids_to_be_created(),
            to_update: self.ids_to_be_updated(),
            to_remove: self.ids_to_remove(),
        };
        debug!(
            to_create = reconciliation.to_create.len(),
            to_update = reconciliation.to_update.len(),
            to_remove = reconciliation.to_remove.len(),
            "reconciled batch"
        );
        reconciliation
    }

    pub fn get_input(&self, key: &str) -> Result<&I> {
        self.inputs.get(key).ok_or_else(|| Error::InputNotFound {
            key: key.to_string(),
        })
    }

    pub fn get_entity(&self, key: &str) -> Result<&E> {
        self.entities.get(key).ok_or_else(|| Error::EntityNotFound {
            key: key.to_string(),
        })
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }
}

fn synthetic_key<E, I>(entities: &KeyedMap<E>, inputs: &KeyedMap<I>) -> String {
    loop {
        let key = Uuid::new_v4().to_string();
        if !entities.contains_key(&key) && !inputs.contains_key(&key) {
            return key;
        }
    }
}
