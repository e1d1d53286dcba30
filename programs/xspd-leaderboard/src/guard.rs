// Authorization Guard
//
// Authorization is a predicate over the set of signers attached to an
// instruction. Anchor's `Signer<'info>` guarantees every key passed in here
// carried a valid signature; the guard only decides whether that set is enough.

use anchor_lang::prelude::*;

use crate::errors::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Initialize,
    InitializeVaults,
    UpdateReferencePrice,
    FundTreasury,
    RegisterTrader,
    RecordTrade,
    RecordFailedTrade,
    DistributeRewards,
    StakeTokens,
    WithdrawStake,
    ClaimRewards,
}

// Who has to be present among the signers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Anyone,
    Subject,
    // Subject that can later be released by the two-party rule
    NonAdminSubject,
    Admin,
    // Two-party release: subject and admin, as distinct identities
    SubjectAndAdmin,
}

impl Operation {
    pub fn requirement(self) -> Requirement {
        match self {
            Operation::Initialize | Operation::FundTreasury => Requirement::Anyone,
            Operation::RecordTrade | Operation::RecordFailedTrade => Requirement::Subject,
            Operation::RegisterTrader | Operation::StakeTokens => Requirement::NonAdminSubject,
            Operation::InitializeVaults
            | Operation::UpdateReferencePrice
            | Operation::DistributeRewards => Requirement::Admin,
            Operation::WithdrawStake | Operation::ClaimRewards => Requirement::SubjectAndAdmin,
        }
    }
}

pub fn is_satisfied(
    operation: Operation,
    signers: &[Pubkey],
    admin: &Pubkey,
    subject: &Pubkey,
) -> bool {
    let signed = |key: &Pubkey| *key != Pubkey::default() && signers.contains(key);

    match operation.requirement() {
        Requirement::Anyone => true,
        Requirement::Subject => signed(subject),
        Requirement::NonAdminSubject => subject != admin && signed(subject),
        Requirement::Admin => signed(admin),
        Requirement::SubjectAndAdmin => subject != admin && signed(subject) && signed(admin),
    }
}

pub fn authorize(
    operation: Operation,
    signers: &[Pubkey],
    admin: &Pubkey,
    subject: &Pubkey,
) -> Result<()> {
    require!(
        is_satisfied(operation, signers, admin, subject),
        LeaderboardError::Unauthorized
    );
    Ok(())
}
