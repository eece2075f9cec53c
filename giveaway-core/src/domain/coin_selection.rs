use crate::domain::model::UnspentOutput;
use crate::foundation::Amount;

/// Chooses which wallet outputs fund a payout.
pub trait CoinSelector: Send + Sync {
    fn select(&self, utxos: &[UnspentOutput], target: Amount) -> Vec<UnspentOutput>;
}

/// Spends every known output and returns the remainder as change.
///
/// Change is derived from the node-reported balance, so every output must be an input.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpendAll;

impl CoinSelector for SpendAll {
    fn select(&self, utxos: &[UnspentOutput], _target: Amount) -> Vec<UnspentOutput> {
        utxos.to_vec()
    }
}
