use cosmwasm_std::{Addr, StdError, StdResult, Uint256, Uint64};
use cosmwasm_schema::cw_serde;

/// This structure holds the parameters used for creating an indexer contract.
#[cw_serde]
pub struct InstantiateMsg {
    /// Address allowed to deliver mirrored events, the indexing runtime's
    /// relayer. Defaults to the instantiator.
    pub owner: Option<String>,
    /// Address of the mirrored JosephDAO governance contract
    pub dao_contract: String,
    /// Chain the governance contract lives on
    pub chain_id: String,
}

/// This enum describes all execute functions available in the contract.
///
/// Event deliveries must arrive in blockchain order (block height, then
/// transaction index, then log index) and at most once each. The contract
/// performs no reordering or buffering, ordering is the delivery source's
/// obligation.
#[cw_serde]
pub enum ExecuteMsg {
    /// Mirror a ProposalSubmitted event into a new Proposal record with
    /// zeroed tallies. A repeat delivery for the same id overwrites the
    /// record, tallies included.
    ProposalSubmitted {
        proposal_id: Uint64,
        description: String,
        send_token_address: String,
        receiver_address: String,
        send_token_amount: Uint256,
        end_time: u64,
        block_timestamp: u64,
        tx_hash: String,
    },
    /// Mirror a VoteOnProposal event. The Vote record is always written,
    /// the tally increment is skipped when the proposal id is unknown.
    VoteOnProposal {
        proposal_id: Uint64,
        /// Sender of the vote transaction, not part of the event payload
        voter: String,
        /// true = yes
        support: bool,
        block_timestamp: u64,
        tx_hash: String,
        log_index: u64,
    },
    /// Mirror a ProposalExecuted event. An unknown id is a no-op.
    ProposalExecuted { proposal_id: Uint64 },
    /// Update parameters in the indexer contract
    UpdateConfig(UpdateConfig),
}

/// This enum describes all the queries available in the contract.
#[cw_serde]
pub enum QueryMsg {
    /// Return the contract's configuration
    Config {},
    /// Return one mirrored proposal
    Proposal { proposal_id: Uint64 },
    /// Return the current list of mirrored proposals
    Proposals {
        /// Id from which to start querying
        start: Option<u64>,
        /// The amount of proposals to return
        limit: Option<u32>,
    },
    /// Return one vote by the identity of its creating event
    Vote { tx_hash: String, log_index: u64 },
    /// Return the vote log entries referencing a proposal
    Votes {
        /// Proposal unique id
        proposal_id: Uint64,
        /// Vote key from which to start querying
        start: Option<String>,
        /// The amount of votes to return
        limit: Option<u32>,
    },
    /// Number of distinct proposals mirrored so far
    ProposalCount {},
    /// Display projection of one proposal at the current block time
    ProposalView {
        proposal_id: Uint64,
        /// Voter to derive the hasVoted gate for
        voter: Option<String>,
    },
}

/// This structure stores general parameters for the indexer contract.
#[cw_serde]
pub struct Config {
    /// Only sender whose event deliveries are accepted
    pub owner: Addr,
    /// Address of the mirrored governance contract
    pub dao_contract: Addr,
    /// Chain the governance contract lives on
    pub chain_id: String,
}

impl Config {
    pub fn validate(&self) -> StdResult<()> {
        if self.chain_id.is_empty() {
            return Err(StdError::generic_err("Chain id cannot be empty!"));
        }

        Ok(())
    }
}

/// This structure stores the params used when updating the indexer config.
#[cw_serde]
pub struct UpdateConfig {
    /// Only sender whose event deliveries are accepted
    pub owner: Option<String>,
    /// Address of the mirrored governance contract
    pub dao_contract: Option<String>,
    /// Chain the governance contract lives on
    pub chain_id: Option<String>,
}

/// This structure stores data for a mirrored proposal.
///
/// The cached tallies are a running summary of the Vote log, they only ever
/// increase and only by 1 per processed vote event. `executed` flips false
/// to true at most once, `end_time` never changes after creation. Consumers
/// needing exact per-voter history should read the Vote log instead of the
/// cached counts if replay order is ever uncertain.
#[cw_serde]
pub struct ProposalRecord {
    /// Unique proposal ID
    pub proposal_id: Uint64,
    /// Proposal description
    pub description: String,
    /// Token the proposal pays out
    pub send_token_address: Addr,
    /// Payout recipient
    pub receiver_address: Addr,
    /// Payout amount in token base units
    pub send_token_amount: Uint256,
    /// Voting deadline, seconds since epoch
    pub end_time: u64,
    /// Running yes tally
    pub yes_votes: Uint64,
    /// Running no tally
    pub no_votes: Uint64,
    /// Execution flag
    pub executed: bool,
    /// Block timestamp of the creating event
    pub created_at: u64,
    /// Transaction hash of the creating event
    pub created_tx: String,
}

/// One address's yes/no choice on one proposal, never mutated or deleted
/// once written.
#[cw_serde]
pub struct VoteRecord {
    /// Proposal the vote references, by id
    pub proposal_id: Uint64,
    /// Sender of the vote transaction
    pub voter: Addr,
    /// true = yes
    pub support: bool,
    /// Block timestamp of the creating event
    pub timestamp: u64,
    /// Transaction hash of the creating event
    pub tx_hash: String,
    /// Log index of the creating event
    pub log_index: u64,
}

impl VoteRecord {
    /// Storage key, the composite identity of the creating event
    pub fn key(tx_hash: &str, log_index: u64) -> String {
        format!("{}-{}", tx_hash, log_index)
    }
}

/// This structure describes a proposal list response.
#[cw_serde]
pub struct ProposalListResponse {
    /// Number of distinct proposals mirrored so far
    pub proposal_count: Uint64,
    /// The list of proposals that are returned
    pub proposal_list: Vec<ProposalRecord>,
}

/// This structure describes a vote list response.
#[cw_serde]
pub struct VoteListResponse {
    /// Proposal identifier
    pub proposal_id: Uint64,
    /// Votes referencing the proposal
    pub votes: Vec<VoteRecord>,
}

/// This structure describes a migration message.
#[cw_serde]
pub struct MigrateMsg {}
