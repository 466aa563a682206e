use crate::constants::{MAX_JOIN_STEP, MIN_JOIN_STEP};
use crate::data_types::join_types::{OrderSubmission, PlanData, PlanDataPatch};

/// Four-step join wizard: plan selection, personal details, per-category
/// meal selections, review. All operations are pure in-memory mutations
/// and never fail; submitting the finished wizard is the order API's job.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinProcess {
    current_step: u8,
    plan_data: PlanData,
}

impl Default for JoinProcess {
    fn default() -> Self {
        Self {
            current_step: MIN_JOIN_STEP,
            plan_data: PlanData::default(),
        }
    }
}

impl JoinProcess {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn plan_data(&self) -> &PlanData {
        &self.plan_data
    }

    /// Clamped to [MIN_JOIN_STEP, MAX_JOIN_STEP], same as the relative
    /// movers, so an out-of-range step is unrepresentable.
    pub fn set_current_step(&mut self, step: u8) {
        self.current_step = step.clamp(MIN_JOIN_STEP, MAX_JOIN_STEP);
    }

    /// No-op at the last step.
    pub fn next_step(&mut self) {
        if self.current_step < MAX_JOIN_STEP {
            self.current_step += 1;
        }
    }

    /// No-op at the first step.
    pub fn prev_step(&mut self) {
        if self.current_step > MIN_JOIN_STEP {
            self.current_step -= 1;
        }
    }

    /// Shallow merge: only fields the patch sets are written. Does not
    /// recompute interdependent fields (price from meals_per_week etc.);
    /// callers own that consistency.
    pub fn update_plan_data(&mut self, patch: PlanDataPatch) {
        let data = &mut self.plan_data;
        if let Some(plan) = patch.plan {
            data.plan = plan;
        }
        if let Some(protein) = patch.protein {
            data.protein = protein;
        }
        if let Some(portion) = patch.portion {
            data.portion = portion;
        }
        if let Some(meals_per_week) = patch.meals_per_week {
            data.meals_per_week = meals_per_week;
        }
        if let Some(price_per_week) = patch.price_per_week {
            data.price_per_week = price_per_week;
        }
        if let Some(delivery_fee) = patch.delivery_fee {
            data.delivery_fee = delivery_fee;
        }
        if let Some(free_shipping) = patch.free_shipping {
            data.free_shipping = free_shipping;
        }
        if let Some(reward_points) = patch.reward_points {
            data.reward_points = reward_points;
        }
        if let Some(personal) = patch.personal {
            data.personal = personal;
        }
        if let Some(main_meals) = patch.main_meals {
            data.main_meals = main_meals;
        }
        if let Some(breakfasts) = patch.breakfasts {
            data.breakfasts = breakfasts;
        }
        if let Some(drinks) = patch.drinks {
            data.drinks = drinks;
        }
    }

    /// Wholesale restore to the initial state, discarding all progress.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Drops only the plan snapshot so the user can change plans without
    /// losing price fields or meal selections.
    pub fn clear_plan(&mut self) {
        self.plan_data.plan = None;
    }

    /// Weekly cost as shown on the review step; the delivery fee counts
    /// as zero when shipping is free.
    pub fn weekly_total(&self) -> f64 {
        let fee = if self.plan_data.free_shipping {
            0.0
        } else {
            self.plan_data.delivery_fee
        };
        self.plan_data.price_per_week + fee
    }

    pub fn selected_meal_count(&self) -> u32 {
        let data = &self.plan_data;
        data.main_meals
            .values()
            .chain(data.breakfasts.values())
            .chain(data.drinks.values())
            .map(|selection| selection.quantity)
            .sum()
    }

    pub fn to_submission(&self) -> OrderSubmission {
        let data = &self.plan_data;
        OrderSubmission {
            plan_id: data.plan.as_ref().map(|p| p.id),
            protein: data.protein.clone(),
            portion: data.portion.clone(),
            meals_per_week: data.meals_per_week,
            price_per_week: data.price_per_week,
            delivery_fee: data.delivery_fee,
            reward_points: data.reward_points,
            personal: data.personal.clone(),
            main_meals: data.main_meals.values().cloned().collect(),
            breakfasts: data.breakfasts.values().cloned().collect(),
            drinks: data.drinks.values().cloned().collect(),
        }
    }
}
