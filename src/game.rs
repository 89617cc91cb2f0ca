use anyhow::Result;
use log::info;
use rand::Rng;

use crate::config::{BASE_TICK_RATE, BOARD_BACKGROUND_COLOR};
use crate::entity::Entity;
use crate::frontend::{InputSource, Renderer, TickLimiter};
use crate::input::Action;
use crate::mode::Tier;
use crate::world::World;

/// The collaborators the loop talks to, built once at startup.
pub struct GameContext<T, L> {
    pub terminal: T,
    pub limiter: L,
}

pub struct SnakeGame<T, L, R> {
    ctx: GameContext<T, L>,
    world: World<R>,
    pending_tier: Option<Tier>,
}

impl<T, L, R> SnakeGame<T, L, R>
where
    T: Renderer + InputSource,
    L: TickLimiter,
    R: Rng,
{
    pub fn new(ctx: GameContext<T, L>, world: World<R>) -> Self {
        SnakeGame { ctx, world, pending_tier: None }
    }

    pub fn world(&self) -> &World<R> {
        &self.world
    }

    pub fn context_mut(&mut self) -> &mut GameContext<T, L> {
        &mut self.ctx
    }

    /// Runs ticks until a quit request. A tier picked during a tick is
    /// applied at the start of the next one.
    pub fn play(&mut self) -> Result<()> {
        self.ctx.terminal.clear(BOARD_BACKGROUND_COLOR)?;
        self.render()?;
        self.ctx.terminal.present()?;

        loop {
            if let Some(tier) = self.pending_tier.take() {
                self.world.switch_tier(tier)?;
                self.ctx.terminal.clear(BOARD_BACKGROUND_COLOR)?;
            }

            self.ctx.limiter.tick(self.world.tier().tick_rate(BASE_TICK_RATE));

            for event in self.ctx.terminal.poll_events()? {
                match Action::from_event(&event) {
                    Some(Action::Quit) => {
                        info!("quit requested");
                        return Ok(());
                    }
                    Some(action @ Action::SelectEasy) | Some(action @ Action::SelectHard) => {
                        self.pending_tier = action.tier();
                    }
                    Some(action) => {
                        if let Some(dir) = action.direction() {
                            self.world.snake_mut().request_direction(dir);
                        }
                    }
                    None => {}
                }
            }

            let report = self.world.step()?;
            if report.reset.is_some() {
                self.ctx.terminal.clear(BOARD_BACKGROUND_COLOR)?;
            }

            self.render()?;
            self.ctx.terminal.present()?;
        }
    }

    fn render(&mut self) -> Result<()> {
        let Self { ctx, world, .. } = self;

        for cell in world.snake().vacated() {
            ctx.terminal.draw_cell(*cell, BOARD_BACKGROUND_COLOR, BOARD_BACKGROUND_COLOR)?;
        }

        // Snake last, so its head is on top of anything it just ate
        let mut entities: Vec<Entity<'_>> = world.entities().into_iter().flatten().collect();
        entities.rotate_left(1);
        for entity in entities {
            let spec = entity.render_spec();
            for cell in entity.occupied_cells() {
                ctx.terminal.draw_cell(*cell, spec.fill, spec.border)?;
            }
        }

        Ok(())
    }
}
