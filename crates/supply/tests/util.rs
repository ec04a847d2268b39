// Cargo treats each test in `tests` as a crate, so for some tests some items
// are considered dead code.
#![allow(dead_code)]

use rc_lock_supply::{
    codec::{encode_supply_info, LockArgsSupply},
    types::{
        CellOutput, HashType, Identity, IdentityFlag, OutPoint, ResolvedCell, Script,
        ScriptTemplate, ScriptType, SudtSupplyInfo,
    },
    Cursor, HelperConfig, Page, PagedQuery, SearchKey,
};
use std::{
    cell::{Cell, RefCell},
    future::{self, Ready},
};
use thiserror::Error;

pub const ALICE: Identity = Identity::new(IdentityFlag::Eth, [0x11; 20]);
pub const BOB: Identity = Identity::new(IdentityFlag::Ckb, [0x12; 20]);
pub const ISSUER_X: [u8; 32] = [0x22; 32];
pub const ISSUER_Y: [u8; 32] = [0x23; 32];

pub fn test_config() -> HelperConfig {
    HelperConfig {
        rc_lock: ScriptTemplate {
            code_hash: [0x44; 32],
            hash_type: HashType::Type,
        },
        sudt_type: ScriptTemplate {
            code_hash: [0x55; 32],
            hash_type: HashType::Type,
        },
    }
}

pub fn test_supply(name: &str) -> SudtSupplyInfo {
    SudtSupplyInfo {
        version: 1,
        current_supply: 1000,
        max_supply: 1_000_000,
        sudt_script_hash: [0x33; 32],
        name: name.to_string(),
        symbol: name.to_uppercase(),
        decimals: 8,
        description: String::new(),
    }
}

/// A cell locked by `lock` holding `output_data`.
pub fn cell(tx: u8, lock: Script, output_data: Vec<u8>) -> ResolvedCell {
    ResolvedCell {
        out_point: OutPoint {
            tx_hash: [tx; 32],
            index: 0,
        },
        output: CellOutput {
            capacity: 20_000_000_000,
            lock,
            type_: None,
        },
        output_data,
    }
}

/// A well formed supply info cell under the test config's RC lock.
pub fn supply_cell(tx: u8, identity: Identity, issuer_id: [u8; 32], name: &str) -> ResolvedCell {
    let args = LockArgsSupply::new(identity, issuer_id).encode().unwrap();
    let lock = test_config().rc_lock.with_args(args);
    cell(tx, lock, encode_supply_info(&test_supply(name)).unwrap())
}

#[derive(Debug, Error)]
#[error("indexer unavailable: {0}")]
pub struct IndexerError(pub String);

/// A `PagedQuery` serving a fixed list of pages regardless of the search key.
///
/// Requests past the last page get an empty page.
pub struct Pages<T> {
    pages: Vec<Result<Vec<T>, String>>,
    requests: RefCell<Vec<Option<Cursor>>>,
}

impl<T> Pages<T> {
    pub fn new(pages: Vec<Result<Vec<T>, String>>) -> Self {
        Self {
            pages,
            requests: RefCell::new(vec![]),
        }
    }

    /// The cursor passed with each request so far.
    pub fn requests(&self) -> Vec<Option<Cursor>> {
        self.requests.borrow().clone()
    }
}

impl<T: Clone> PagedQuery for Pages<T> {
    type Item = T;
    type Error = IndexerError;
    type Future = Ready<Result<Page<T>, IndexerError>>;

    fn get_cells(&self, _search_key: &SearchKey, after_cursor: Option<&Cursor>) -> Self::Future {
        let mut requests = self.requests.borrow_mut();
        let n = requests.len();
        requests.push(after_cursor.cloned());
        let last_cursor = Cursor(vec![n as u8]);
        let res = match self.pages.get(n) {
            Some(Ok(objects)) => Ok(Page {
                objects: objects.clone(),
                last_cursor,
            }),
            Some(Err(msg)) => Err(IndexerError(msg.clone())),
            None => Ok(Page {
                objects: vec![],
                last_cursor,
            }),
        };
        future::ready(res)
    }
}

/// An in-memory indexer matching lock scripts by code, hash type and args
/// prefix, serving `page_size` cells per page.
pub struct Indexer {
    cells: Vec<ResolvedCell>,
    page_size: usize,
    requests: Cell<usize>,
    fail: bool,
}

impl Indexer {
    pub fn new(cells: Vec<ResolvedCell>, page_size: usize) -> Self {
        Self {
            cells,
            page_size,
            requests: Cell::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(vec![], 1)
        }
    }

    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl PagedQuery for Indexer {
    type Item = ResolvedCell;
    type Error = IndexerError;
    type Future = Ready<Result<Page<ResolvedCell>, IndexerError>>;

    fn get_cells(&self, search_key: &SearchKey, after_cursor: Option<&Cursor>) -> Self::Future {
        self.requests.set(self.requests.get() + 1);
        if self.fail {
            return future::ready(Err(IndexerError("connection refused".to_string())));
        }
        assert_eq!(search_key.script_type, ScriptType::Lock);
        let start = after_cursor.map_or(0, |cursor| {
            let mut arr = [0u8; 4];
            arr.copy_from_slice(&cursor.0);
            u32::from_le_bytes(arr) as usize
        });
        let key = &search_key.script;
        let matches: Vec<_> = self
            .cells
            .iter()
            .filter(|cell| {
                let lock = &cell.output.lock;
                lock.code_hash == key.code_hash
                    && lock.hash_type == key.hash_type
                    && lock.args.starts_with(&key.args)
            })
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();
        let end = start + matches.len();
        future::ready(Ok(Page {
            objects: matches,
            last_cursor: Cursor((end as u32).to_le_bytes().to_vec()),
        }))
    }
}
