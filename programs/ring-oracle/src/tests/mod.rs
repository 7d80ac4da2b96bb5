mod hook_registry;
mod price_ring;
