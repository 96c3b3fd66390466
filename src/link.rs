//! Navigation wiring across a page sequence.
//!
//! Final stage of the pipeline. Post-processes one template's ordered
//! artifact stream to set previous/next/first/last references and the
//! positional fields derived from them. Purely a function of position —
//! no I/O, no failure modes.

use crate::types::PageArtifact;

/// Wire navigation references across one ordered pagination stream.
///
/// For the artifact at position `i` (1-based) of `n`: first/last flags at
/// the ends, neighbor indices elsewhere. `offset` counts the items on
/// earlier pages and `remaining` the items on later ones.
pub fn link(artifacts: &mut [PageArtifact]) {
    let total = artifacts.len();
    let mut offset = 0;
    for (pos, artifact) in artifacts.iter_mut().enumerate() {
        let i = pos + 1;
        artifact.is_first = i == 1;
        artifact.is_last = i == total;
        artifact.prev_index = (i > 1).then(|| i - 1);
        artifact.next_index = (i < total).then(|| i + 1);
        artifact.offset = offset;
        offset += artifact.items.len();
        artifact.remaining = artifact.total_items.saturating_sub(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::assign;
    use crate::config::{RawConfig, resolve_config};
    use crate::emit::emit_stream;
    use crate::test_helpers::{CollectingLogger, RecordingSite, item, template};

    fn linked_stream(n_items: usize, per_page: usize) -> Vec<PageArtifact> {
        let raw: RawConfig = toml::from_str(&format!(
            "[pagination]\nenabled = true\nper_page = {per_page}\n"
        ))
        .unwrap();
        let config = resolve_config(&raw).unwrap();
        let items: Vec<_> = (0..n_items).map(|i| item(&format!("item-{i}"))).collect();
        let buckets = assign(&items, per_page);
        let mut site = RecordingSite::new(Vec::new(), Vec::new());
        let log = CollectingLogger::default();
        let mut artifacts =
            emit_stream(&config, &template("blog/index.html"), &buckets, &mut site, &log).unwrap();
        link(&mut artifacts);
        artifacts
    }

    #[test]
    fn single_page_is_both_first_and_last() {
        let artifacts = linked_stream(3, 10);
        assert_eq!(artifacts.len(), 1);
        let only = &artifacts[0];
        assert!(only.is_first && only.is_last);
        assert_eq!(only.prev_index, None);
        assert_eq!(only.next_index, None);
        assert_eq!(only.offset, 0);
        assert_eq!(only.remaining, 0);
    }

    #[test]
    fn ends_of_the_chain_have_no_dangling_neighbors() {
        let artifacts = linked_stream(25, 10);
        let first = &artifacts[0];
        let last = &artifacts[2];
        assert!(first.is_first && !first.is_last);
        assert_eq!(first.prev_index, None);
        assert!(last.is_last && !last.is_first);
        assert_eq!(last.next_index, None);
    }

    #[test]
    fn neighbor_indices_chain_bidirectionally() {
        let artifacts = linked_stream(25, 10);
        for pair in artifacts.windows(2) {
            assert_eq!(pair[0].next_index, Some(pair[1].index));
            assert_eq!(pair[1].prev_index, Some(pair[0].index));
        }
    }

    #[test]
    fn offset_and_remaining_partition_the_item_count() {
        let artifacts = linked_stream(25, 10);
        assert_eq!(
            artifacts.iter().map(|a| a.offset).collect::<Vec<_>>(),
            vec![0, 10, 20]
        );
        assert_eq!(
            artifacts.iter().map(|a| a.remaining).collect::<Vec<_>>(),
            vec![15, 5, 0]
        );
        for a in &artifacts {
            assert_eq!(a.offset + a.items.len() + a.remaining, a.total_items);
        }
    }
}
