use cosmwasm_std::{Decimal, Uint64};
use cosmwasm_schema::cw_serde;
use std::fmt::{Display, Formatter, Result};

//Constants
pub const SECONDS_PER_DAY: u64 = 86_400u64;
pub const SECONDS_PER_HOUR: u64 = 3_600u64;
pub const SECONDS_PER_MINUTE: u64 = 60u64;

/// This enum describes the display status of a proposal.
#[cw_serde]
pub enum ProposalStatus {
    Active,
    Passed,
    Failed,
    Executed,
}

impl Display for ProposalStatus {
    fn fmt(&self, fmt: &mut Formatter) -> Result {
        match self {
            ProposalStatus::Active {} => fmt.write_str("active"),
            ProposalStatus::Passed {} => fmt.write_str("passed"),
            ProposalStatus::Failed {} => fmt.write_str("failed"),
            ProposalStatus::Executed {} => fmt.write_str("executed"),
        }
    }
}

/// Time left until a proposal's voting deadline.
#[cw_serde]
pub enum Countdown {
    Ended {},
    Remaining { days: u64, hours: u64, minutes: u64 },
}

/// Display-ready projection of one proposal, consumed as a single value by a
/// rendering layer.
#[cw_serde]
pub struct ProposalView {
    pub proposal_id: Uint64,
    pub status: ProposalStatus,
    pub yes_votes: Uint64,
    pub no_votes: Uint64,
    pub yes_percentage: Decimal,
    pub countdown: Countdown,
    pub can_vote: bool,
    pub can_execute: bool,
}

/// Derive a proposal's display status.
/// Execution always wins, even over inconsistent vote counts. An unended
/// proposal is Active and only unexecuted, time-expired proposals resolve
/// to Passed/Failed. Ties fail.
pub fn proposal_status(
    executed: bool,
    now_seconds: u64,
    end_time: u64,
    yes_votes: u64,
    no_votes: u64,
) -> ProposalStatus {
    if executed {
        ProposalStatus::Executed
    } else if now_seconds < end_time {
        ProposalStatus::Active
    } else if yes_votes > no_votes {
        ProposalStatus::Passed
    } else {
        ProposalStatus::Failed
    }
}

/// Yes share of the tally as a percentage in [0, 100].
/// An empty tally returns the neutral midpoint so a bar renders evenly.
pub fn yes_percentage(yes_votes: u64, no_votes: u64) -> Decimal {
    let total = yes_votes + no_votes;
    if total == 0 {
        return Decimal::from_ratio(50u128, 1u128);
    }

    Decimal::from_ratio(yes_votes as u128 * 100, total as u128)
}

/// Whole days/hours/minutes until the deadline. Seconds are truncated, not
/// rounded, and not reported.
pub fn countdown(now_seconds: u64, end_time: u64) -> Countdown {
    if now_seconds >= end_time {
        return Countdown::Ended {};
    }
    let remaining = end_time - now_seconds;

    Countdown::Remaining {
        days: remaining / SECONDS_PER_DAY,
        hours: (remaining % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
        minutes: (remaining % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
    }
}

/// A passed, unexecuted proposal becomes executable once voting ends.
/// Failed proposals never do, regardless of later calls.
pub fn can_execute(
    executed: bool,
    now_seconds: u64,
    end_time: u64,
    yes_votes: u64,
    no_votes: u64,
) -> bool {
    !executed && now_seconds >= end_time && yes_votes > no_votes
}

/// Vote gating for display only. One vote per (voter, proposal) is enforced
/// by the governance contract, this just reflects already-known state.
pub fn can_vote(has_voted: bool, now_seconds: u64, end_time: u64) -> bool {
    !has_voted && now_seconds < end_time
}

/// Assemble the full display projection for one proposal.
pub fn proposal_view(
    proposal_id: Uint64,
    executed: bool,
    now_seconds: u64,
    end_time: u64,
    yes_votes: u64,
    no_votes: u64,
    has_voted: bool,
) -> ProposalView {
    ProposalView {
        proposal_id,
        status: proposal_status(executed, now_seconds, end_time, yes_votes, no_votes),
        yes_votes: Uint64::new(yes_votes),
        no_votes: Uint64::new(no_votes),
        yes_percentage: yes_percentage(yes_votes, no_votes),
        countdown: countdown(now_seconds, end_time),
        can_vote: can_vote(has_voted, now_seconds, end_time),
        can_execute: can_execute(executed, now_seconds, end_time, yes_votes, no_votes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_precedence() {
        //Execution wins regardless of any other field
        assert_eq!(proposal_status(true, 0, 1_000, 0, 5), ProposalStatus::Executed);
        assert_eq!(proposal_status(true, 2_000, 1_000, 1, 3), ProposalStatus::Executed);

        //Unended proposals are active
        assert_eq!(proposal_status(false, 999, 1_000, 0, 5), ProposalStatus::Active);

        //Expired proposals resolve by tally, ties fail
        assert_eq!(proposal_status(false, 1_000, 1_000, 3, 1), ProposalStatus::Passed);
        assert_eq!(proposal_status(false, 1_000, 1_000, 1, 3), ProposalStatus::Failed);
        assert_eq!(proposal_status(false, 1_000, 1_000, 2, 2), ProposalStatus::Failed);
    }

    #[test]
    fn tally_split() {
        assert_eq!(yes_percentage(0, 0), Decimal::from_ratio(50u128, 1u128));
        assert_eq!(yes_percentage(3, 1), Decimal::from_ratio(75u128, 1u128));
        assert_eq!(yes_percentage(1, 3), Decimal::from_ratio(25u128, 1u128));
    }

    #[test]
    fn deadline_countdown() {
        assert_eq!(
            countdown(1_000, 1_000 + SECONDS_PER_DAY + 3_661),
            Countdown::Remaining {
                days: 1,
                hours: 1,
                minutes: 1,
            }
        );
        //Seconds truncate
        assert_eq!(
            countdown(0, 59),
            Countdown::Remaining {
                days: 0,
                hours: 0,
                minutes: 0,
            }
        );
        assert_eq!(countdown(2_000, 1_000), Countdown::Ended {});
        assert_eq!(countdown(1_000, 1_000), Countdown::Ended {});
    }

    #[test]
    fn execute_gating() {
        assert!(!can_execute(true, 2_000, 1_000, 3, 1));
        assert!(!can_execute(false, 999, 1_000, 3, 1));
        assert!(!can_execute(false, 2_000, 1_000, 2, 2));
        assert!(!can_execute(false, 2_000, 1_000, 1, 3));
        assert!(can_execute(false, 2_000, 1_000, 3, 1));
        //Deadline itself counts as ended
        assert!(can_execute(false, 1_000, 1_000, 3, 1));
    }

    #[test]
    fn vote_gating() {
        assert!(can_vote(false, 999, 1_000));
        assert!(!can_vote(true, 999, 1_000));
        assert!(!can_vote(false, 1_000, 1_000));
    }

    #[test]
    fn assembled_view() {
        let view = proposal_view(Uint64::new(4), false, 2_000, 1_000, 3, 1, false);

        assert_eq!(view.status, ProposalStatus::Passed);
        assert_eq!(view.yes_percentage, Decimal::from_ratio(75u128, 1u128));
        assert_eq!(view.countdown, Countdown::Ended {});
        assert!(view.can_execute);
        assert!(!view.can_vote);
    }
}
