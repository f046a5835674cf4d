use cosmwasm_std::{Addr, Uint128, Uint256, Uint64};
use cosmwasm_schema::cw_serde;

/// This enum describes the execute surface of the JosephDAO governance
/// contract. Inputs are forwarded as given, malformed addresses or an empty
/// description are rejected by the contract, not locally. Each submitted
/// message is independent, confirmation is observed by the caller.
#[cw_serde]
pub enum ExecuteMsg {
    /// Submit a new proposal with an optional token transfer payload
    SubmitProposal {
        description: String,
        send_token_address: String,
        receiver_address: String,
        send_token_amount: Uint256,
    },
    /// Cast a yes/no vote on an active proposal
    VoteOnProposal {
        /// Proposal identifier
        proposal_id: Uint64,
        /// true = yes
        vote: bool,
    },
    /// Execute a passed proposal
    ExecuteProposal {
        /// Proposal identifier
        proposal_id: Uint64,
    },
}

/// This enum describes the read surface of the JosephDAO governance contract.
#[cw_serde]
pub enum QueryMsg {
    /// Address of the vote token
    VoteToken {},
    /// Number of proposals submitted so far
    ProposalCount {},
    /// Minimum participation threshold, informational display only
    MinimumQuorum {},
    /// Return the stored fields of a specific proposal
    Proposal { proposal_id: Uint64 },
    /// Running yes tally of a specific proposal
    YesVotes { proposal_id: Uint64 },
    /// Running no tally of a specific proposal
    NoVotes { proposal_id: Uint64 },
    /// Whether a specific proposal has been executed
    IsExecuted { proposal_id: Uint64 },
    /// Whether a user already voted on a specific proposal
    UserHasVoted { proposal_id: Uint64, user: String },
}

/// Core proposal fields as stored by the governance contract.
#[cw_serde]
pub struct ProposalInfoResponse {
    pub description: String,
    pub send_token_address: Addr,
    pub receiver_address: Addr,
    /// Token base units
    pub send_token_amount: Uint256,
    /// Voting deadline, seconds since epoch
    pub end_time: u64,
}

/// Dashboard header stats. Every field is an independent read, None until
/// loaded and rendered with a placeholder, never a fatal error.
#[cw_serde]
pub struct DaoOverview {
    pub proposal_count: Option<Uint64>,
    pub vote_token: Option<Addr>,
    pub minimum_quorum: Option<Uint64>,
}

/// Vote token facts read through the cw20 surface, each independently
/// optional.
#[cw_serde]
pub struct TokenStats {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
    pub total_supply: Option<Uint128>,
    /// Only read once an account is connected
    pub balance: Option<Uint128>,
}

/// Raw per-proposal reads a display card is derived from. Tally and
/// execution reads default when unavailable, staleness is tolerated.
#[cw_serde]
pub struct ProposalState {
    pub description: String,
    pub send_token_address: Addr,
    pub receiver_address: Addr,
    pub send_token_amount: Uint256,
    pub end_time: u64,
    pub yes_votes: Uint64,
    pub no_votes: Uint64,
    pub executed: bool,
}
