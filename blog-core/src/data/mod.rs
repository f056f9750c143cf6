pub mod blog_repository;
pub mod observers;
pub mod post_repository;
pub mod seed;

/// High-water-mark id rule shared by both collections: one past the highest
/// id in `ids`, or `1` when there are none.
///
/// When the highest id is `u64::MAX` there is nothing past it, so the lowest
/// positive id not in `ids` is used instead.
pub(crate) fn next_id<I>(ids: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    let mut ids: Vec<u64> = ids.into_iter().collect();
    let Some(&max) = ids.iter().max() else {
        return 1;
    };
    if let Some(next) = max.checked_add(1) {
        return next;
    }

    ids.sort_unstable();
    ids.dedup();
    let mut candidate = 1;
    for id in ids {
        if id > candidate {
            break;
        }
        if id == candidate {
            candidate += 1;
        }
    }
    candidate
}
