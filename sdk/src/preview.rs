use splitsquads::{
    distribution::{plan_distribution, DistributionPlan},
    state::{Member, Squad},
    weight::{weight_breakdown, WeightBreakdown},
};

use crate::error::Error;

// Weight the program would assign this member at `now`
pub fn preview_weight(member: &Member, squad: &Squad, now: i64) -> Result<WeightBreakdown, Error> {
    weight_breakdown(
        member.stake_amount,
        member.tenure(now),
        squad.member_count,
        member.activity_score,
    )
    .map_err(Error::from)
}

/// Shares a `distribute_rewards` call would pay at `now`, in the order
/// the members are given.
pub fn preview_distribution(
    squad: &Squad,
    members: &[Member],
    vault_balance: u64,
    now: i64,
) -> Result<DistributionPlan, Error> {
    let weights = members
        .iter()
        .map(|member| member.weight(now, squad.member_count))
        .collect::<anchor_lang::Result<Vec<u64>>>()?;
    Ok(plan_distribution(vault_balance, &weights)?)
}

#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;

    use super::*;

    const DAY: i64 = 86_400;

    fn squad(member_count: u8) -> Squad {
        Squad {
            authority: Pubkey::new_unique(),
            name: "wolves".to_string(),
            max_members: 8,
            member_count,
            total_staked: 0,
            rewards_vault: Pubkey::new_unique(),
            bump: 255,
            squad_vault: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            squad_vault_bump: 255,
            rewards_vault_bump: 255,
        }
    }

    fn member(stake_amount: u64, activity_score: u32) -> Member {
        let mut member = Member::new(Pubkey::new_unique(), Pubkey::new_unique(), 0, 255);
        member.stake_amount = stake_amount;
        member.activity_score = activity_score;
        member
    }

    #[test]
    fn preview_matches_the_engine() {
        let breakdown = preview_weight(&member(1_000_000_000, 100), &squad(8), 90 * DAY).unwrap();
        assert_eq!(breakdown.tenure_multiplier, 200);
        assert_eq!(breakdown.squad_multiplier, 124);
        assert_eq!(breakdown.activity_multiplier, 150);
        assert_eq!(breakdown.final_weight, 37);
    }

    #[test]
    fn distribution_preview_reports_the_remainder() {
        let members = [member(2_000_000_000, 0), member(4_000_000_000, 0)];
        let plan = preview_distribution(&squad(2), &members, 1_000, 0).unwrap();
        assert_eq!(plan.shares, vec![333, 666]);
        assert_eq!(plan.remainder, 1);
    }

    #[test]
    fn distribution_preview_surfaces_program_errors() {
        let err = preview_distribution(&squad(2), &[member(0, 0)], 1_000, 0).unwrap_err();
        assert_eq!(
            err.squad_error().map(u32::from),
            Some(u32::from(splitsquads::errors::SquadError::ZeroTotalWeight))
        );
    }
}
