//! Logical runs spanning several segments
//!
//! A [`MultiSegment`] presents an ordered list of segments - possibly on
//! different strips, possibly physically discontinuous - as one logical
//! pixel run, so a single rule appears to flow across all of them.

use embassy_time::Instant;
use heapless::Vec;

use crate::rule::{Rule, RuleError};
use crate::segment::Segment;

struct Member<'a> {
    segment: Segment<'a>,
    flipped: bool,
}

/// An ordered composition of up to `MAX_SEGMENTS` segments.
///
/// With `continuous` set (the default), each member is offset by the summed
/// size of all preceding members, so the pattern's coordinate increases
/// monotonically across the whole run. Without it, every member replays the
/// pattern from its own zero origin.
pub struct MultiSegment<'a, const MAX_SEGMENTS: usize> {
    members: Vec<Member<'a>, MAX_SEGMENTS>,
    continuous: bool,
    rule: Option<Rule>,
}

impl<'a, const MAX_SEGMENTS: usize> MultiSegment<'a, MAX_SEGMENTS> {
    /// Create an empty continuous run.
    pub const fn new() -> Self {
        Self::with_continuity(true)
    }

    /// Create an empty run with explicit continuity.
    pub const fn with_continuity(continuous: bool) -> Self {
        Self {
            members: Vec::new(),
            continuous,
            rule: None,
        }
    }

    /// Append a member segment. `flipped` members run the pattern mirrored.
    ///
    /// Returns the segment back if the member list is full.
    pub fn push(
        &mut self,
        segment: Segment<'a>,
        flipped: bool,
    ) -> Result<(), Segment<'a>> {
        self.members
            .push(Member { segment, flipped })
            .map_err(|member| member.segment)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub const fn is_continuous(&self) -> bool {
        self.continuous
    }

    /// The installed logical pattern, if any.
    pub fn rule(&self) -> Option<&Rule> {
        self.rule.as_ref()
    }

    /// Total logical size: the sum of all member sizes.
    pub fn size(&self) -> usize {
        self.members
            .iter()
            .map(|member| member.segment.size())
            .sum()
    }

    /// Install `rule` as the run's logical pattern.
    ///
    /// Each member receives its own independently cloned copy: flipped
    /// members get a flip transform, and continuous runs add an offset equal
    /// to the summed size of all preceding members. Later changes to one
    /// member's copy never perturb siblings or the stored original.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn set_rule(&mut self, rule: Rule) -> Result<(), RuleError> {
        let mut cumulative: i32 = 0;
        for member in &mut self.members {
            let mut derived = rule.clone().offset(cumulative)?;
            if member.flipped {
                derived = derived.flip()?;
            }
            member.segment.set_rule(derived)?;
            if self.continuous {
                cumulative += member.segment.size() as i32;
            }
        }
        self.rule = Some(rule);
        Ok(())
    }

    /// Remove the rule from every member; the run then renders off.
    pub fn clear_rule(&mut self) {
        for member in &mut self.members {
            member.segment.clear_rule();
        }
        self.rule = None;
    }

    /// Render every member segment into its owning strip.
    pub fn render(&self, now: Instant) {
        for member in &self.members {
            member.segment.render(now);
        }
    }
}

impl<const MAX_SEGMENTS: usize> Default for MultiSegment<'_, MAX_SEGMENTS> {
    fn default() -> Self {
        Self::new()
    }
}
