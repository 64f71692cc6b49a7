//! Property-based tests for batch reconciliation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    use crate::batch::BatchUpdater;

    fn entity_keys_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-f0-9]{1,3}", 0..24)
    }

    /// `None` stands for an input that has not been persisted yet.
    fn input_keys_strategy() -> impl Strategy<Value = Vec<Option<String>>> {
        prop::collection::vec(prop::option::weighted(0.8, "[a-f0-9]{1,3}"), 0..24)
    }

    fn build(
        entities: &[String],
        inputs: &[Option<String>],
    ) -> BatchUpdater<String, Option<String>> {
        BatchUpdater::new(
            entities.iter().cloned(),
            |e| e.clone(),
            inputs.iter().cloned(),
            |i| i.clone(),
        )
    }

    proptest! {
        #[test]
        fn test_classification_matches_set_algebra(
            entities in entity_keys_strategy(),
            inputs in input_keys_strategy()
        ) {
            let updater = build(&entities, &inputs);

            let entity_keys: BTreeSet<String> = entities.iter().cloned().collect();
            let removed: BTreeSet<String> = updater.ids_to_remove().into_iter().collect();
            let updated: BTreeSet<String> = updater.ids_to_be_updated().into_iter().collect();
            let created: BTreeSet<String> = updater.ids_to_be_created().into_iter().collect();

            let explicit: BTreeSet<String> = inputs.iter().flatten().cloned().collect();
            let expected_removed: BTreeSet<String> =
                entity_keys.difference(&explicit).cloned().collect();
            let expected_updated: BTreeSet<String> =
                entity_keys.intersection(&explicit).cloned().collect();

            prop_assert_eq!(&removed, &expected_removed);
            prop_assert_eq!(&updated, &expected_updated);
            prop_assert!(created.is_disjoint(&entity_keys));

            let explicit_created = explicit.difference(&entity_keys).count();
            let keyless = inputs.iter().filter(|i| i.is_none()).count();
            prop_assert_eq!(created.len(), explicit_created + keyless);
        }

        #[test]
        fn test_counts_partition_both_mappings(
            entities in entity_keys_strategy(),
            inputs in input_keys_strategy()
        ) {
            let updater = build(&entities, &inputs);
            let updated = updater.ids_to_be_updated().len();

            prop_assert_eq!(updater.ids_to_remove().len() + updated, updater.entity_count());
            prop_assert_eq!(updater.ids_to_be_created().len() + updated, updater.input_count());
        }

        #[test]
        fn test_classified_keys_resolve(
            entities in entity_keys_strategy(),
            inputs in input_keys_strategy()
        ) {
            let updater = build(&entities, &inputs);

            for key in updater.ids_to_remove() {
                prop_assert!(updater.get_entity(&key).is_ok());
                prop_assert!(updater.get_input(&key).is_err());
            }
            for key in updater.ids_to_be_updated() {
                prop_assert!(updater.get_entity(&key).is_ok());
                prop_assert!(updater.get_input(&key).is_ok());
            }
            for key in updater.ids_to_be_created() {
                prop_assert!(updater.get_input(&key).is_ok());
                prop_assert!(updater.get_entity(&key).is_err());
            }
        }

        #[test]
        fn test_foreign_key_fails_both_lookups(
            entities in entity_keys_strategy(),
            inputs in input_keys_strategy(),
            probe in "[g-z]{4,8}"
        ) {
            let updater = build(&entities, &inputs);

            prop_assert!(updater.get_entity(&probe).is_err());
            prop_assert!(updater.get_input(&probe).is_err());
        }
    }
}
