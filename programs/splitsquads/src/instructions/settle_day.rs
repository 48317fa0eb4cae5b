// Settle Day Instruction
//
// Permissionless, once per day after the settlement phase opens. Only the
// round and pot ledgers change; tokens stay in the pot vault until claimed.

use anchor_lang::prelude::*;

use crate::{constants::*, events::DaySettled, state::*};

#[derive(Accounts)]
#[instruction(day_unix: i64)]
pub struct SettleDay<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [CONFIG],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, GameConfig>>,

    #[account(
        mut,
        seeds = [ROUND, day_unix.to_le_bytes().as_ref()],
        bump = daily_round.bump,
    )]
    pub daily_round: Box<Account<'info, DailyRound>>,

    #[account(
        mut,
        seeds = [COMMUNITY_POT],
        bump = community_pot.bump,
    )]
    pub community_pot: Box<Account<'info, CommunityPot>>,
}

impl<'info> SettleDay<'info> {
    pub fn settle_day(&mut self, day_unix: i64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        let settlement = self.daily_round.settle(
            self.community_pot.balance,
            self.config.pot_release_bps,
            now,
        )?;
        self.community_pot.apply_settlement(&settlement)?;

        msg!(
            "Day {} settled: split pool {}, steal pool {}, pot {}",
            day_unix,
            settlement.split_pool,
            settlement.steal_pool,
            settlement.pot_after
        );

        emit!(DaySettled {
            day_unix,
            split_pool: settlement.split_pool,
            steal_pool: settlement.steal_pool,
            captured: settlement.captured,
            slashed: settlement.slashed,
            forfeited: settlement.forfeited,
            pot_bonus: settlement.pot_bonus,
            pot_balance: settlement.pot_after,
        });

        Ok(())
    }
}
