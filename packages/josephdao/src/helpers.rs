use cosmwasm_std::{
    to_binary, CosmosMsg, QuerierWrapper, StdResult, Uint256, Uint64, WasmMsg,
};
use cw20::{BalanceResponse, Cw20QueryMsg, TokenInfoResponse};

use crate::dao::{DaoOverview, ExecuteMsg, ProposalInfoResponse, ProposalState, QueryMsg, TokenStats};
use crate::views::{proposal_view, ProposalView};

/// Read the dashboard header stats, one independent query per field.
/// A failed or not-yet-possible read surfaces as None, never as an error.
pub fn query_dao_overview(querier: QuerierWrapper, dao_contract: String) -> DaoOverview {
    DaoOverview {
        proposal_count: querier
            .query_wasm_smart(dao_contract.clone(), &QueryMsg::ProposalCount {})
            .ok(),
        vote_token: querier
            .query_wasm_smart(dao_contract.clone(), &QueryMsg::VoteToken {})
            .ok(),
        minimum_quorum: querier
            .query_wasm_smart(dao_contract, &QueryMsg::MinimumQuorum {})
            .ok(),
    }
}

/// Read vote token facts through the cw20 surface. The balance is only read
/// once an account is connected.
pub fn query_token_stats(
    querier: QuerierWrapper,
    vote_token: String,
    account: Option<String>,
) -> TokenStats {
    let info: Option<TokenInfoResponse> = querier
        .query_wasm_smart(vote_token.clone(), &Cw20QueryMsg::TokenInfo {})
        .ok();

    let balance = account.and_then(|address| {
        querier
            .query_wasm_smart::<BalanceResponse>(vote_token, &Cw20QueryMsg::Balance { address })
            .ok()
    });

    TokenStats {
        name: info.clone().map(|info| info.name),
        symbol: info.clone().map(|info| info.symbol),
        decimals: info.clone().map(|info| info.decimals),
        total_supply: info.map(|info| info.total_supply),
        balance: balance.map(|balance| balance.balance),
    }
}

/// Read everything a proposal card is derived from. None while the core
/// fields haven't loaded, tally and execution reads default until they do.
pub fn query_proposal_state(
    querier: QuerierWrapper,
    dao_contract: String,
    proposal_id: Uint64,
) -> Option<ProposalState> {
    let info: ProposalInfoResponse = querier
        .query_wasm_smart(dao_contract.clone(), &QueryMsg::Proposal { proposal_id })
        .ok()?;

    let yes_votes: Uint64 = querier
        .query_wasm_smart(dao_contract.clone(), &QueryMsg::YesVotes { proposal_id })
        .unwrap_or_default();
    let no_votes: Uint64 = querier
        .query_wasm_smart(dao_contract.clone(), &QueryMsg::NoVotes { proposal_id })
        .unwrap_or_default();
    let executed: bool = querier
        .query_wasm_smart(dao_contract, &QueryMsg::IsExecuted { proposal_id })
        .unwrap_or_default();

    Some(ProposalState {
        description: info.description,
        send_token_address: info.send_token_address,
        receiver_address: info.receiver_address,
        send_token_amount: info.send_token_amount,
        end_time: info.end_time,
        yes_votes,
        no_votes,
        executed,
    })
}

/// Whether a user already voted on a proposal. An unavailable read counts
/// as not voted, matching the optimistic display gate.
pub fn query_user_has_voted(
    querier: QuerierWrapper,
    dao_contract: String,
    proposal_id: Uint64,
    user: String,
) -> bool {
    querier
        .query_wasm_smart(dao_contract, &QueryMsg::UserHasVoted { proposal_id, user })
        .unwrap_or_default()
}

/// Derive the display card for one proposal from its raw reads.
pub fn proposal_card(
    proposal_id: Uint64,
    state: &ProposalState,
    now_seconds: u64,
    has_voted: bool,
) -> ProposalView {
    proposal_view(
        proposal_id,
        state.executed,
        now_seconds,
        state.end_time,
        state.yes_votes.u64(),
        state.no_votes.u64(),
        has_voted,
    )
}

/// Build the submission tx for a new proposal. Fire and forget, no retry,
/// confirmation is observed asynchronously by the caller.
pub fn submit_proposal_msg(
    dao_contract: String,
    description: String,
    send_token_address: String,
    receiver_address: String,
    send_token_amount: Uint256,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: dao_contract,
        msg: to_binary(&ExecuteMsg::SubmitProposal {
            description,
            send_token_address,
            receiver_address,
            send_token_amount,
        })?,
        funds: vec![],
    }))
}

/// Build a yes/no vote tx for an active proposal.
pub fn vote_msg(dao_contract: String, proposal_id: Uint64, vote: bool) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: dao_contract,
        msg: to_binary(&ExecuteMsg::VoteOnProposal { proposal_id, vote })?,
        funds: vec![],
    }))
}

/// Build the execution tx for a passed proposal.
pub fn execute_proposal_msg(dao_contract: String, proposal_id: Uint64) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: dao_contract,
        msg: to_binary(&ExecuteMsg::ExecuteProposal { proposal_id })?,
        funds: vec![],
    }))
}
