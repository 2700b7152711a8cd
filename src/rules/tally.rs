//! Plurality selection shared by accusations and the werewolves' night kill.
//!
//! A candidate wins only with strictly more votes than every other
//! candidate. Any tie at the top, or no votes at all, means no winner.

use rustc_hash::FxHashMap;

use crate::core::PlayerId;

/// Pick the unique most-voted target.
///
/// ```
/// use werewolf_rules::core::PlayerId;
/// use werewolf_rules::rules::plurality;
///
/// let a = PlayerId::new("a");
/// let b = PlayerId::new("b");
///
/// assert_eq!(plurality([&a, &b, &a]), Some(&a));
/// assert_eq!(plurality([&a, &b]), None);
/// ```
pub fn plurality<'a, I>(targets: I) -> Option<&'a PlayerId>
where
    I: IntoIterator<Item = &'a PlayerId>,
{
    let mut counts: FxHashMap<&PlayerId, usize> = FxHashMap::default();
    for target in targets {
        *counts.entry(target).or_insert(0) += 1;
    }

    let mut leader = None;
    let mut best = 0;
    let mut tied = false;
    for (target, count) in counts {
        if count > best {
            best = count;
            leader = Some(target);
            tied = false;
        } else if count == best {
            tied = true;
        }
    }

    if tied {
        None
    } else {
        leader
    }
}
