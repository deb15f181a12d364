/// Scene: everything one frame draws
///
/// The scene owns programs, resource sets and textures, and an ordered list
/// of draw commands referencing them by id. Releasing the scene releases
/// every device object it owns.

use crate::device::GraphicsDevice;
use crate::error::{Error, Result};
use crate::resource::{GpuResourceSet, Texture};
use crate::shader::ShaderProgram;

/// Index of a program in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramId(usize);

/// Index of a resource set in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceSetId(usize);

/// Index of a texture in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(usize);

/// One draw call: program + resource set + texture unit bindings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCommand {
    pub program: ProgramId,
    pub resource_set: ResourceSetId,
    /// (texture unit, texture) pairs bound before drawing
    pub textures: Vec<(u32, TextureId)>,
}

impl DrawCommand {
    pub fn new(program: ProgramId, resource_set: ResourceSetId) -> Self {
        Self {
            program,
            resource_set,
            textures: Vec::new(),
        }
    }

    /// Bind `texture` to `unit` before drawing
    pub fn with_texture(mut self, unit: u32, texture: TextureId) -> Self {
        self.textures.push((unit, texture));
        self
    }
}

/// Programs, resource sets, textures and the draw list
#[derive(Debug, Default)]
pub struct Scene {
    programs: Vec<ShaderProgram>,
    resource_sets: Vec<GpuResourceSet>,
    textures: Vec<Texture>,
    draws: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== OWNERSHIP =====

    pub fn add_program(&mut self, program: ShaderProgram) -> ProgramId {
        self.programs.push(program);
        ProgramId(self.programs.len() - 1)
    }

    pub fn add_resource_set(&mut self, resource_set: GpuResourceSet) -> ResourceSetId {
        self.resource_sets.push(resource_set);
        ResourceSetId(self.resource_sets.len() - 1)
    }

    pub fn add_texture(&mut self, texture: Texture) -> TextureId {
        self.textures.push(texture);
        TextureId(self.textures.len() - 1)
    }

    /// Append a draw command (drawn in insertion order)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidResource` if the command references an id that
    /// does not belong to this scene.
    pub fn add_draw(&mut self, command: DrawCommand) -> Result<()> {
        if command.program.0 >= self.programs.len() {
            return Err(Error::InvalidResource(format!("unknown program id {}", command.program.0)));
        }
        if command.resource_set.0 >= self.resource_sets.len() {
            return Err(Error::InvalidResource(format!("unknown resource set id {}", command.resource_set.0)));
        }
        if let Some((unit, texture)) = command.textures.iter().find(|(_, t)| t.0 >= self.textures.len()) {
            return Err(Error::InvalidResource(format!("unknown texture id {} for unit {}", texture.0, unit)));
        }
        self.draws.push(command);
        Ok(())
    }

    // ===== ACCESS =====

    pub fn program(&self, id: ProgramId) -> Option<&ShaderProgram> {
        self.programs.get(id.0)
    }

    /// Mutable access, for uniform uploads
    pub fn program_mut(&mut self, id: ProgramId) -> Option<&mut ShaderProgram> {
        self.programs.get_mut(id.0)
    }

    pub fn resource_set(&self, id: ResourceSetId) -> Option<&GpuResourceSet> {
        self.resource_sets.get(id.0)
    }

    pub fn texture(&self, id: TextureId) -> Option<&Texture> {
        self.textures.get(id.0)
    }

    pub fn draw_commands(&self) -> &[DrawCommand] {
        &self.draws
    }

    /// Use `program` and point its sampler uniforms at texture units
    ///
    /// `assign_sampler_units(device, id, &[("texture1", 0), ("texture2", 1)])`
    /// matches the unit indices used in the draw commands.
    pub fn assign_sampler_units(
        &mut self,
        device: &mut dyn GraphicsDevice,
        program: ProgramId,
        samplers: &[(&str, u32)],
    ) -> Result<()> {
        let program = self.programs.get_mut(program.0).ok_or_else(|| {
            Error::InvalidResource(format!("unknown program id {}", program.0))
        })?;
        program.use_program(device);
        for (name, unit) in samplers {
            program.set_int(device, name, *unit as i32);
        }
        Ok(())
    }

    // ===== FRAME =====

    /// Issue every draw command in order
    pub fn render(&self, device: &mut dyn GraphicsDevice) {
        for command in &self.draws {
            // Ids are validated by add_draw
            let (Some(program), Some(resource_set)) = (
                self.programs.get(command.program.0),
                self.resource_sets.get(command.resource_set.0),
            ) else {
                continue;
            };
            program.use_program(device);
            for (unit, texture) in &command.textures {
                if let Some(texture) = self.textures.get(texture.0) {
                    texture.bind(device, *unit);
                }
            }
            resource_set.draw(device);
        }
    }

    /// Release every owned device object
    ///
    /// Leaves no program, vertex array, buffer or texture bound.
    pub fn release(self, device: &mut dyn GraphicsDevice) {
        let counts = (self.programs.len(), self.resource_sets.len(), self.textures.len());
        for program in self.programs {
            program.release(device);
        }
        for resource_set in self.resource_sets {
            resource_set.release(device);
        }
        for texture in self.textures {
            texture.release(device);
        }
        crate::kit_info!(
            "glkit::Scene",
            "Released {} programs, {} resource sets, {} textures",
            counts.0,
            counts.1,
            counts.2
        );
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
