use std::cmp::Ordering;

use crate::errors::sort::SortError;
use crate::models::container_ps::ListContainer;
use crate::models::sort_key::SortKey;

type Comparator = fn(&ListContainer, &ListContainer) -> Ordering;

/// Orders a listing snapshot by the key named in `sort_by`.
///
/// The sort is stable. Entries without size detail are incomparable under
/// `size`: they keep the positions they had and only sized entries are
/// reordered among the remaining slots.
pub fn sort_ps_output(
    sort_by: &str,
    containers: Vec<ListContainer>,
) -> Result<Vec<ListContainer>, SortError> {
    let key: SortKey = sort_by.parse()?;
    sort_by_key(key, containers)
}

pub fn sort_by_key(
    key: SortKey,
    mut containers: Vec<ListContainer>,
) -> Result<Vec<ListContainer>, SortError> {
    tracing::debug!(key = %key, count = containers.len(), "Sorting containers");

    match key {
        SortKey::Size => return Ok(sort_sized_in_place(containers)),
        SortKey::Names => ensure_primary_names(&containers)?,
        _ => {}
    }

    containers.sort_by(comparator_for(key));
    Ok(containers)
}

fn ensure_primary_names(containers: &[ListContainer]) -> Result<(), SortError> {
    match containers.iter().find(|c| c.names.is_empty()) {
        Some(unnamed) => Err(SortError::MissingPrimaryName {
            id: unnamed.id.clone(),
        }),
        None => Ok(()),
    }
}

fn comparator_for(key: SortKey) -> Comparator {
    match key {
        SortKey::Command => compare_command,
        SortKey::Created => compare_created,
        SortKey::Id => compare_id,
        SortKey::Image => compare_image,
        SortKey::Names => compare_names,
        SortKey::RunningFor => compare_running_for,
        SortKey::Size => compare_size,
        SortKey::Status => compare_status,
        SortKey::Pod => compare_pod,
    }
}

fn compare_command(a: &ListContainer, b: &ListContainer) -> Ordering {
    a.command.join(" ").cmp(&b.command.join(" "))
}

fn compare_created(a: &ListContainer, b: &ListContainer) -> Ordering {
    a.created.cmp(&b.created)
}

fn compare_id(a: &ListContainer, b: &ListContainer) -> Ordering {
    a.id.cmp(&b.id)
}

fn compare_image(a: &ListContainer, b: &ListContainer) -> Ordering {
    a.image.cmp(&b.image)
}

fn compare_names(a: &ListContainer, b: &ListContainer) -> Ordering {
    a.primary_name().cmp(&b.primary_name())
}

fn compare_running_for(a: &ListContainer, b: &ListContainer) -> Ordering {
    a.started_at.cmp(&b.started_at)
}

// Absent sizes compare equal to everything; only safe on a sized-only slice.
fn compare_size(a: &ListContainer, b: &ListContainer) -> Ordering {
    match (&a.size, &b.size) {
        (Some(a), Some(b)) => a.root_fs_size.cmp(&b.root_fs_size),
        _ => Ordering::Equal,
    }
}

fn compare_status(a: &ListContainer, b: &ListContainer) -> Ordering {
    a.state.cmp(&b.state)
}

fn compare_pod(a: &ListContainer, b: &ListContainer) -> Ordering {
    a.pod.cmp(&b.pod)
}

fn sort_sized_in_place(containers: Vec<ListContainer>) -> Vec<ListContainer> {
    let (sized, unsized_): (Vec<_>, Vec<_>) = containers
        .into_iter()
        .enumerate()
        .partition(|(_, c)| c.size.is_some());

    let (slots, mut sized): (Vec<usize>, Vec<ListContainer>) = sized.into_iter().unzip();
    sized.sort_by(compare_size);

    let mut placed: Vec<(usize, ListContainer)> =
        slots.into_iter().zip(sized).chain(unsized_).collect();
    placed.sort_unstable_by_key(|(slot, _)| *slot);

    placed.into_iter().map(|(_, c)| c).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::container_ps::ContainerSize;

    fn container(id: &str) -> ListContainer {
        ListContainer {
            id: id.to_string(),
            names: vec![format!("name-{}", id)],
            ..Default::default()
        }
    }

    fn with_size(id: &str, root_fs_size: i64) -> ListContainer {
        ListContainer {
            size: Some(ContainerSize {
                root_fs_size,
                rw_size: 0,
            }),
            ..container(id)
        }
    }

    fn ids(containers: &[ListContainer]) -> Vec<&str> {
        containers.iter().map(|c| c.id.as_str()).collect()
    }

    fn sample() -> Vec<ListContainer> {
        vec![
            ListContainer {
                image: "redis:7".to_string(),
                command: vec!["redis-server".to_string()],
                created: 300,
                started_at: 310,
                state: "running".to_string(),
                pod: "podB".to_string(),
                ..with_size("c3", 30)
            },
            ListContainer {
                image: "alpine:3".to_string(),
                command: vec!["ls".to_string(), "-l".to_string()],
                created: 100,
                started_at: 0,
                state: "created".to_string(),
                ..container("c1")
            },
            ListContainer {
                image: "nginx:1".to_string(),
                command: vec!["bash".to_string()],
                created: 200,
                started_at: 250,
                state: "exited".to_string(),
                pod: "podA".to_string(),
                ..with_size("c2", 10)
            },
        ]
    }

    #[test]
    fn given_unsorted_ids_when_sort_by_id_then_ascending() {
        let sorted = sort_ps_output("id", sample()).unwrap();
        assert_eq!(ids(&sorted), vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn given_commands_when_sort_by_command_then_joined_strings_ascending() {
        let sorted = sort_ps_output("command", sample()).unwrap();
        assert_eq!(ids(&sorted), vec!["c2", "c1", "c3"]);
    }

    #[test]
    fn given_commands_differing_only_in_token_boundaries_when_sort_by_command_then_equal() {
        let split = ListContainer {
            command: vec!["sh".to_string(), "-c".to_string()],
            ..container("split")
        };
        let joined = ListContainer {
            command: vec!["sh -c".to_string()],
            ..container("joined")
        };

        assert_eq!(compare_command(&split, &joined), Ordering::Equal);

        let sorted = sort_ps_output("command", vec![split.clone(), joined.clone()]).unwrap();
        assert_eq!(ids(&sorted), vec!["split", "joined"]);
    }

    #[test]
    fn given_never_started_container_when_sort_by_runningfor_then_sorts_first() {
        let sorted = sort_ps_output("runningfor", sample()).unwrap();
        assert_eq!(ids(&sorted), vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn given_states_when_sort_by_status_then_lexicographic() {
        let sorted = sort_ps_output("status", sample()).unwrap();
        assert_eq!(ids(&sorted), vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn given_images_when_sort_by_image_then_lexicographic() {
        let sorted = sort_ps_output("image", sample()).unwrap();
        assert_eq!(ids(&sorted), vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn given_creation_times_when_sort_by_created_then_oldest_first() {
        let sorted = sort_ps_output("created", sample()).unwrap();
        assert_eq!(ids(&sorted), vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn given_pod_and_non_pod_containers_when_sort_by_pod_then_empty_pod_first() {
        let sorted = sort_ps_output("pod", sample()).unwrap();
        assert_eq!(ids(&sorted), vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn given_primary_names_when_sort_by_names_then_only_first_name_counts() {
        let a = ListContainer {
            names: vec!["zeta".to_string(), "alpha".to_string()],
            ..container("a")
        };
        let b = ListContainer {
            names: vec!["beta".to_string()],
            ..container("b")
        };

        let sorted = sort_ps_output("names", vec![a, b]).unwrap();

        assert_eq!(ids(&sorted), vec!["b", "a"]);
    }

    #[test]
    fn given_container_without_names_when_sort_by_names_then_precondition_error() {
        let unnamed = ListContainer {
            names: vec![],
            ..container("ghost")
        };

        let result = sort_ps_output("names", vec![container("c1"), unnamed]);

        assert_eq!(
            result,
            Err(SortError::MissingPrimaryName {
                id: "ghost".to_string()
            })
        );
    }

    #[test]
    fn given_container_without_names_when_sort_by_other_key_then_no_error() {
        let unnamed = ListContainer {
            names: vec![],
            ..container("ghost")
        };

        let sorted = sort_ps_output("id", vec![container("c1"), unnamed]).unwrap();

        assert_eq!(ids(&sorted), vec!["c1", "ghost"]);
    }

    #[test]
    fn given_sized_containers_when_sort_by_size_then_root_fs_size_ascending() {
        let input = vec![with_size("big", 300), with_size("small", 1), with_size("mid", 20)];

        let sorted = sort_ps_output("size", input).unwrap();

        assert_eq!(ids(&sorted), vec!["small", "mid", "big"]);
    }

    #[test]
    fn given_absent_and_present_sizes_when_compared_then_neither_is_less() {
        let absent = container("absent");
        let present = with_size("present", 100);

        assert_eq!(compare_size(&absent, &present), Ordering::Equal);
        assert_eq!(compare_size(&present, &absent), Ordering::Equal);
    }

    #[test]
    fn given_mixed_sizes_when_sort_by_size_then_absent_entries_keep_their_slots() {
        let input = vec![
            with_size("big", 300),
            container("absent-1"),
            with_size("small", 1),
            container("absent-2"),
            with_size("mid", 20),
        ];

        let sorted = sort_ps_output("size", input).unwrap();

        assert_eq!(
            ids(&sorted),
            vec!["small", "absent-1", "mid", "absent-2", "big"]
        );
    }

    #[test]
    fn given_zero_size_when_sort_by_size_then_treated_as_present() {
        let input = vec![with_size("one", 1), with_size("zero", 0)];

        let sorted = sort_ps_output("size", input).unwrap();

        assert_eq!(ids(&sorted), vec!["zero", "one"]);
    }

    #[test]
    fn given_unknown_key_when_sort_then_error_and_no_result() {
        let result = sort_ps_output("uptime", sample());

        assert_eq!(
            result,
            Err(SortError::InvalidSortKey {
                key: "uptime".to_string()
            })
        );
    }

    #[test]
    fn given_empty_key_when_sort_then_error() {
        assert!(sort_ps_output("", sample()).is_err());
    }

    #[test]
    fn given_empty_snapshot_when_sort_by_any_key_then_empty() {
        for key in SortKey::ALL {
            assert!(sort_by_key(key, vec![]).unwrap().is_empty());
        }
    }

    #[test]
    fn given_any_key_when_sorted_then_result_is_permutation_of_input() {
        for key in SortKey::ALL {
            let mut expected: Vec<String> = sample().into_iter().map(|c| c.id).collect();
            expected.sort();

            let mut actual: Vec<String> = sort_by_key(key, sample())
                .unwrap()
                .into_iter()
                .map(|c| c.id)
                .collect();
            actual.sort();

            assert_eq!(expected, actual, "key {}", key);
        }
    }

    #[test]
    fn given_sorted_output_when_sorted_again_then_unchanged() {
        for key in SortKey::ALL {
            let once = sort_by_key(key, sample()).unwrap();
            let twice = sort_by_key(key, once.clone()).unwrap();

            assert_eq!(once, twice, "key {}", key);
        }
    }

    #[test]
    fn given_equal_keys_when_sorted_then_input_order_is_kept() {
        let input = vec![
            ListContainer {
                state: "running".to_string(),
                ..container("first")
            },
            ListContainer {
                state: "running".to_string(),
                ..container("second")
            },
        ];

        let sorted = sort_ps_output("status", input).unwrap();

        assert_eq!(ids(&sorted), vec!["first", "second"]);
    }
}
