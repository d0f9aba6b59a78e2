use tracing::{debug, warn};

use crate::bag::ArrayBag;
use crate::dietary::DietaryRequest;
use crate::kitchen::report::KitchenReport;
use crate::models::{CuisineType, Dish};

/// Holds the dishes currently on order and keeps running totals in step
/// with every order and serve.
#[derive(Debug, Clone)]
pub struct Kitchen {
    dishes: ArrayBag<Dish>,
    /// Sum of `prep_time` over held dishes.
    total_prep_time: u64,
    /// Number of held dishes that are elaborate.
    elaborate_count: usize,
}

impl Kitchen {
    /// Create a kitchen with the default bag capacity.
    pub fn new() -> Self {
        Self::from_bag(ArrayBag::new())
    }

    /// Create a kitchen that holds at most `capacity` dishes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_bag(ArrayBag::with_capacity(capacity))
    }

    fn from_bag(dishes: ArrayBag<Dish>) -> Self {
        Self {
            dishes,
            total_prep_time: 0,
            elaborate_count: 0,
        }
    }

    /// Take a new order. Returns false if the kitchen is at capacity.
    pub fn new_order(&mut self, dish: Dish) -> bool {
        let prep_time = dish.prep_time();
        let elaborate = dish.is_elaborate();
        let name = dish.name().to_string();

        if !self.dishes.add(dish) {
            warn!(dish = %name, capacity = self.dishes.capacity(), "kitchen full, order rejected");
            return false;
        }

        self.total_prep_time += u64::from(prep_time);
        if elaborate {
            self.elaborate_count += 1;
        }
        debug!(dish = %name, prep_time, elaborate, "order added");
        true
    }

    /// Serve (remove) the first held dish equal to `dish`.
    ///
    /// Returns false when the kitchen is empty or no held dish matches.
    pub fn serve_dish(&mut self, dish: &Dish) -> bool {
        self.take_dish(dish).is_some()
    }

    fn take_dish(&mut self, dish: &Dish) -> Option<Dish> {
        if self.dishes.is_empty() {
            return None;
        }

        let served = self.dishes.take(dish)?;
        self.total_prep_time -= u64::from(served.prep_time());
        if served.is_elaborate() {
            self.elaborate_count -= 1;
        }
        debug!(dish = %served.name(), "dish served");
        Some(served)
    }

    /// Apply `request` to a held dish without letting the totals drift.
    ///
    /// The dish is taken out, rewritten and ordered again. Returns the dish as
    /// the kitchen now holds it, or `None` if no held dish equals `dish`.
    pub fn accommodate_dish(&mut self, dish: &Dish, request: &DietaryRequest) -> Option<&Dish> {
        let mut held = self.take_dish(dish)?;
        held.apply_dietary_accommodations(request);
        // A slot was just freed, so this cannot hit capacity.
        if !self.new_order(held) {
            return None;
        }
        self.dishes.last()
    }

    /// Total preparation time of every held dish.
    pub fn prep_time_sum(&self) -> u64 {
        if self.dishes.is_empty() {
            return 0;
        }
        self.total_prep_time
    }

    /// Mean prep time, rounded half away from zero (60 and 61 give 61).
    pub fn average_prep_time(&self) -> u32 {
        if self.dishes.is_empty() {
            return 0;
        }
        let sum: u64 = self.dishes.iter().map(|d| u64::from(d.prep_time())).sum();
        (sum as f64 / self.dishes.len() as f64).round() as u32
    }

    pub fn elaborate_dish_count(&self) -> usize {
        if self.dishes.is_empty() {
            return 0;
        }
        self.elaborate_count
    }

    /// Percentage of elaborate dishes, rounded to two decimal places.
    pub fn elaborate_percentage(&self) -> f64 {
        if self.dishes.is_empty() || self.elaborate_count == 0 {
            return 0.0;
        }
        let ratio = self.elaborate_count as f64 / self.dishes.len() as f64;
        (ratio * 10_000.0).round() / 100.0
    }

    /// Number of held dishes of the given cuisine.
    pub fn tally_cuisine_type(&self, cuisine: CuisineType) -> usize {
        self.dishes
            .iter()
            .filter(|d| d.cuisine_type() == cuisine)
            .count()
    }

    /// Serve every dish that takes less than `threshold` minutes.
    pub fn release_dishes_below_prep_time(&mut self, threshold: u32) -> usize {
        let released = self.release_matching(|d| d.prep_time() < threshold);
        debug!(threshold, released, "released quick dishes");
        released
    }

    /// Serve every dish of the given cuisine.
    pub fn release_dishes_of_cuisine_type(&mut self, cuisine: CuisineType) -> usize {
        let released = self.release_matching(|d| d.cuisine_type() == cuisine);
        debug!(cuisine = %cuisine, released, "released cuisine");
        released
    }

    /// Candidates are collected before any removal, since serving reorders
    /// the bag.
    fn release_matching<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&Dish) -> bool,
    {
        let candidates: Vec<Dish> = self.dishes.iter().filter(|d| predicate(d)).cloned().collect();
        candidates
            .iter()
            .filter(|dish| self.serve_dish(dish))
            .count()
    }

    /// Snapshot of the kitchen's statistics.
    pub fn kitchen_report(&self) -> KitchenReport {
        KitchenReport {
            cuisine_tallies: CuisineType::ALL
                .into_iter()
                .map(|c| (c, self.tally_cuisine_type(c)))
                .collect(),
            total_dishes: self.len(),
            average_prep_time: self.average_prep_time(),
            elaborate_percentage: self.elaborate_percentage(),
        }
    }

    /// First held dish whose name matches, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Dish> {
        let key = name.to_lowercase();
        self.dishes.iter().find(|d| d.key() == key)
    }

    pub fn dishes(&self) -> impl Iterator<Item = &Dish> {
        self.dishes.iter()
    }

    pub fn contains(&self, dish: &Dish) -> bool {
        self.dishes.contains(dish)
    }

    pub fn len(&self) -> usize {
        self.dishes.current_size()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.dishes.capacity()
    }
}

impl Default for Kitchen {
    fn default() -> Self {
        Self::new()
    }
}
