//! JSON-RPC method names sent to the node.

pub const PARITY_ENODE: &str = "parity_enode";
pub const PARITY_LIST_STORAGE_KEYS: &str = "parity_listStorageKeys";
pub const PARITY_NET_PEERS: &str = "parity_netPeers";
pub const PARITY_ADD_RESERVED_PEER: &str = "parity_addReservedPeer";
pub const PARITY_SET_MODE: &str = "parity_setMode";
pub const PARITY_MODE: &str = "parity_mode";

pub const TRACE_REPLAY_TRANSACTION: &str = "trace_replayTransaction";
pub const TRACE_REPLAY_BLOCK_TRANSACTIONS: &str = "trace_replayBlockTransactions";
pub const TRACE_BLOCK: &str = "trace_block";
pub const TRACE_FILTER: &str = "trace_filter";
pub const TRACE_TRANSACTION: &str = "trace_transaction";
pub const TRACE_CALL: &str = "trace_call";
pub const TRACE_RAW_TRANSACTION: &str = "trace_rawTransaction";

pub const PERSONAL_EC_RECOVER: &str = "personal_ecRecover";
pub const PERSONAL_IMPORT_RAW_KEY: &str = "personal_importRawKey";
pub const PERSONAL_LIST_ACCOUNTS: &str = "personal_listAccounts";
pub const PERSONAL_NEW_ACCOUNT: &str = "personal_newAccount";
pub const PERSONAL_SEND_TRANSACTION: &str = "personal_sendTransaction";
pub const PERSONAL_SIGN: &str = "personal_sign";
pub const PERSONAL_SIGN_TYPED_DATA: &str = "personal_signTypedData";
pub const PERSONAL_UNLOCK_ACCOUNT: &str = "personal_unlockAccount";
