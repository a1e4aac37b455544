fn main() {
    thermal_browser::mount();
}
