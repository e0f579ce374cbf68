use log::{info, warn};
use parking_lot::Mutex;
use rand::rngs::OsRng;
use rand::Rng;

const NODE_ID_BITS: u64 = 10;
const SEQUENCE_BITS: u64 = 12;
const EPOCH: u64 = 1288834974657;

struct GeneratorState {
    last_timestamp: u64,
    sequence: u64,
}

/// Snowflake-style generator behind [RecipeId](crate::collection::RecipeId).
///
/// Ids are `timestamp | node | sequence`. With the fixed epoch, ids generated
/// today land in `[10^18, 10^19)`.
pub struct SnowflakeIdGenerator {
    node_id: u64,
    state: Mutex<GeneratorState>,
}

impl SnowflakeIdGenerator {
    pub fn new() -> Self {
        let max_node_id = (1 << NODE_ID_BITS) - 1;
        let mut node_id = SnowflakeIdGenerator::random_node_id();
        if node_id > max_node_id {
            warn!("Node id can't be greater than {}", max_node_id);
            node_id = OsRng.gen_range(1..=max_node_id);
        }
        info!("Initialized id generator with node id: {}", node_id);

        SnowflakeIdGenerator {
            node_id,
            state: Mutex::new(GeneratorState {
                last_timestamp: 0,
                sequence: 0,
            }),
        }
    }

    pub fn get_id(&self) -> u64 {
        let sequence_mask = (1 << SEQUENCE_BITS) - 1;
        let mut state = self.state.lock();

        let mut timestamp = current_millis().max(state.last_timestamp);
        if timestamp == state.last_timestamp {
            state.sequence = (state.sequence + 1) & sequence_mask;
            if state.sequence == 0 {
                // sequence exhausted for this millisecond
                while timestamp <= state.last_timestamp {
                    std::thread::yield_now();
                    timestamp = current_millis();
                }
            }
        } else {
            state.sequence = 0;
        }
        state.last_timestamp = timestamp;

        ((timestamp - EPOCH) << (SEQUENCE_BITS + NODE_ID_BITS))
            | (self.node_id << SEQUENCE_BITS)
            | state.sequence
    }

    fn random_node_id() -> u64 {
        let uuid = uuid::Uuid::new_v4();
        let uid = uuid.as_bytes();
        let rnd_byte = OsRng.gen::<u64>() & 0x000000FF;

        ((0x000000FF & uid[uid.len() - 1] as u64) | (0x0000FF00 & (rnd_byte << 8))) >> 6
    }
}

impl Default for SnowflakeIdGenerator {
    fn default() -> Self {
        SnowflakeIdGenerator::new()
    }
}

fn current_millis() -> u64 {
    chrono::Utc::now().timestamp_millis().max(EPOCH as i64) as u64
}
