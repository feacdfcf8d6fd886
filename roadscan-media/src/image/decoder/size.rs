use crate::Image;

impl Image {
    pub fn get_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
