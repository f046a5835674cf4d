use cosmwasm_std::{
    attr, entry_point, to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdResult, Uint256, Uint64,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use josephdao::indexer::{
    Config, ExecuteMsg, InstantiateMsg, MigrateMsg, ProposalListResponse, ProposalRecord,
    QueryMsg, UpdateConfig, VoteListResponse, VoteRecord,
};
use josephdao::views::{proposal_view, ProposalView};

use crate::error::ContractError;
use crate::state::{CONFIG, PROPOSALS, PROPOSAL_COUNT, VOTES};

// Contract name and version used for migration.
const CONTRACT_NAME: &str = "josephdao-indexer";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// Default pagination constants
const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;
const DEFAULT_VOTES_LIMIT: u32 = 100;
const MAX_VOTES_LIMIT: u32 = 250;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        owner: match msg.owner {
            Some(owner) => deps.api.addr_validate(&owner)?,
            None => info.sender,
        },
        dao_contract: deps.api.addr_validate(&msg.dao_contract)?,
        chain_id: msg.chain_id,
    };

    config.validate()?;

    CONFIG.save(deps.storage, &config)?;

    PROPOSAL_COUNT.save(deps.storage, &Uint64::zero())?;

    Ok(Response::new()
        .add_attribute("config", format!("{:?}", config))
        .add_attribute("contract_address", env.contract.address))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    //Only the configured delivery source can mirror events or edit config
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    match msg {
        ExecuteMsg::ProposalSubmitted {
            proposal_id,
            description,
            send_token_address,
            receiver_address,
            send_token_amount,
            end_time,
            block_timestamp,
            tx_hash,
        } => proposal_submitted(
            deps,
            proposal_id,
            description,
            send_token_address,
            receiver_address,
            send_token_amount,
            end_time,
            block_timestamp,
            tx_hash,
        ),
        ExecuteMsg::VoteOnProposal {
            proposal_id,
            voter,
            support,
            block_timestamp,
            tx_hash,
            log_index,
        } => vote_on_proposal(
            deps,
            proposal_id,
            voter,
            support,
            block_timestamp,
            tx_hash,
            log_index,
        ),
        ExecuteMsg::ProposalExecuted { proposal_id } => proposal_executed(deps, proposal_id),
        ExecuteMsg::UpdateConfig(update) => update_config(deps, config, update),
    }
}

/// Create the mirrored record for a newly submitted proposal, tallies zeroed.
/// No uniqueness check: a repeat delivery for an id overwrites the record,
/// so duplicate submissions reset its tallies.
pub fn proposal_submitted(
    deps: DepsMut,
    proposal_id: Uint64,
    description: String,
    send_token_address: String,
    receiver_address: String,
    send_token_amount: Uint256,
    end_time: u64,
    block_timestamp: u64,
    tx_hash: String,
) -> Result<Response, ContractError> {
    let proposal = ProposalRecord {
        proposal_id,
        description,
        send_token_address: deps.api.addr_validate(&send_token_address)?,
        receiver_address: deps.api.addr_validate(&receiver_address)?,
        send_token_amount,
        end_time,
        yes_votes: Uint64::zero(),
        no_votes: Uint64::zero(),
        executed: false,
        created_at: block_timestamp,
        created_tx: tx_hash,
    };

    //Count distinct ids only, replays don't inflate the count
    if !PROPOSALS.has(deps.storage, proposal_id.to_string()) {
        PROPOSAL_COUNT.update(deps.storage, |c| -> StdResult<_> {
            Ok(c.checked_add(Uint64::new(1))?)
        })?;
    }

    PROPOSALS.save(deps.storage, proposal_id.to_string(), &proposal)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "proposal_submitted"),
        attr("proposal_id", proposal_id),
        attr("proposal_end_time", end_time.to_string()),
    ]))
}

/// Record a vote and bump the proposal's cached tally.
/// The Vote record is written unconditionally. A vote referencing an id the
/// store has never seen keeps the tallies untouched, no error, no rollback.
pub fn vote_on_proposal(
    deps: DepsMut,
    proposal_id: Uint64,
    voter: String,
    support: bool,
    block_timestamp: u64,
    tx_hash: String,
    log_index: u64,
) -> Result<Response, ContractError> {
    let vote = VoteRecord {
        proposal_id,
        voter: deps.api.addr_validate(&voter)?,
        support,
        timestamp: block_timestamp,
        tx_hash: tx_hash.clone(),
        log_index,
    };

    VOTES.save(deps.storage, VoteRecord::key(&tx_hash, log_index), &vote)?;

    let mut tallied = false;
    if let Some(mut proposal) = PROPOSALS.may_load(deps.storage, proposal_id.to_string())? {
        if support {
            proposal.yes_votes = proposal.yes_votes.checked_add(Uint64::new(1))?;
        } else {
            proposal.no_votes = proposal.no_votes.checked_add(Uint64::new(1))?;
        }

        PROPOSALS.save(deps.storage, proposal_id.to_string(), &proposal)?;
        tallied = true;
    }

    Ok(Response::new().add_attributes(vec![
        attr("action", "vote_on_proposal"),
        attr("proposal_id", proposal_id),
        attr("voter", vote.voter),
        attr("support", support.to_string()),
        attr("tallied", tallied.to_string()),
    ]))
}

/// Flip the executed flag on a mirrored proposal. An unknown id is a no-op.
pub fn proposal_executed(deps: DepsMut, proposal_id: Uint64) -> Result<Response, ContractError> {
    let mut found = false;
    if let Some(mut proposal) = PROPOSALS.may_load(deps.storage, proposal_id.to_string())? {
        proposal.executed = true;

        PROPOSALS.save(deps.storage, proposal_id.to_string(), &proposal)?;
        found = true;
    }

    Ok(Response::new().add_attributes(vec![
        attr("action", "proposal_executed"),
        attr("proposal_id", proposal_id),
        attr("found", found.to_string()),
    ]))
}

/// Update the indexer's configuration
pub fn update_config(
    deps: DepsMut,
    mut config: Config,
    update: UpdateConfig,
) -> Result<Response, ContractError> {
    if let Some(owner) = update.owner {
        config.owner = deps.api.addr_validate(&owner)?;
    }
    if let Some(dao_contract) = update.dao_contract {
        config.dao_contract = deps.api.addr_validate(&dao_contract)?;
    }
    if let Some(chain_id) = update.chain_id {
        config.chain_id = chain_id;
    }

    config.validate()?;

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_config")
        .add_attribute("updated_config", format!("{:?}", config)))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::Proposal { proposal_id } => {
            to_binary(&PROPOSALS.load(deps.storage, proposal_id.to_string())?)
        }
        QueryMsg::Proposals { start, limit } => to_binary(&query_proposals(deps, start, limit)?),
        QueryMsg::Vote { tx_hash, log_index } => {
            to_binary(&VOTES.load(deps.storage, VoteRecord::key(&tx_hash, log_index))?)
        }
        QueryMsg::Votes {
            proposal_id,
            start,
            limit,
        } => to_binary(&query_votes(deps, proposal_id, start, limit)?),
        QueryMsg::ProposalCount {} => to_binary(&PROPOSAL_COUNT.load(deps.storage)?),
        QueryMsg::ProposalView { proposal_id, voter } => {
            to_binary(&query_proposal_view(deps, env, proposal_id, voter)?)
        }
    }
}

/// Return a list of mirrored Proposals
pub fn query_proposals(
    deps: Deps,
    start: Option<u64>,
    limit: Option<u32>,
) -> StdResult<ProposalListResponse> {
    let proposal_count = PROPOSAL_COUNT.load(deps.storage)?;

    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start.map(|start| Bound::inclusive(start.to_string()));

    let proposal_list = PROPOSALS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, proposal) = item?;
            Ok(proposal)
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ProposalListResponse {
        proposal_count,
        proposal_list,
    })
}

/// Return the Vote log entries referencing a given proposal
pub fn query_votes(
    deps: Deps,
    proposal_id: Uint64,
    start: Option<String>,
    limit: Option<u32>,
) -> StdResult<VoteListResponse> {
    let limit = limit.unwrap_or(DEFAULT_VOTES_LIMIT).min(MAX_VOTES_LIMIT) as usize;
    let start = start.map(Bound::inclusive);

    let votes = VOTES
        .range(deps.storage, start, None, Order::Ascending)
        .filter_map(|item| match item {
            Ok((_, vote)) if vote.proposal_id == proposal_id => Some(Ok(vote)),
            Ok(_) => None,
            Err(err) => Some(Err(err)),
        })
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    Ok(VoteListResponse { proposal_id, votes })
}

/// Derive the display projection of a mirrored proposal at block time
pub fn query_proposal_view(
    deps: Deps,
    env: Env,
    proposal_id: Uint64,
    voter: Option<String>,
) -> StdResult<ProposalView> {
    let proposal = PROPOSALS.load(deps.storage, proposal_id.to_string())?;

    let has_voted = match voter {
        Some(voter) => {
            let voter = deps.api.addr_validate(&voter)?;

            VOTES
                .range(deps.storage, None, None, Order::Ascending)
                .any(|item| {
                    matches!(item, Ok((_, vote)) if vote.proposal_id == proposal_id && vote.voter == voter)
                })
        }
        None => false,
    };

    Ok(proposal_view(
        proposal.proposal_id,
        proposal.executed,
        env.block.time.seconds(),
        proposal.end_time,
        proposal.yes_votes.u64(),
        proposal.no_votes.u64(),
        has_voted,
    ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    Ok(Response::default())
}
