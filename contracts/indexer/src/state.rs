use cosmwasm_std::Uint64;
use cw_storage_plus::{Item, Map};

use josephdao::indexer::{Config, ProposalRecord, VoteRecord};

pub const CONFIG: Item<Config> = Item::new("config");
pub const PROPOSAL_COUNT: Item<Uint64> = Item::new("proposal_count");
pub const PROPOSALS: Map<String, ProposalRecord> = Map::new("proposals"); //proposal_id
pub const VOTES: Map<String, VoteRecord> = Map::new("votes"); //"{tx_hash}-{log_index}"
