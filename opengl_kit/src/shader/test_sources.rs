/// GLSL fixtures for unit tests

pub const PASS_THROUGH_VERTEX: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
";

pub const PASS_THROUGH_FRAGMENT: &str = "#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
";

pub const TRANSFORM_VERTEX: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec2 aTexCoord;
out vec2 TexCoord;
uniform mat4 transform;
void main()
{
    gl_Position = transform * vec4(aPos, 1.0);
    TexCoord = aTexCoord;
}
";

pub const UNIFORM_FRAGMENT: &str = "#version 330 core
out vec4 FragColor;
uniform vec4 ourColor;
uniform float mixValue;
uniform bool useColor;
uniform int debugMode;
void main()
{
    FragColor = useColor ? ourColor * mixValue : vec4(float(debugMode));
}
";

pub const TEXTURED_FRAGMENT: &str = "#version 330 core
out vec4 FragColor;
in vec2 TexCoord;
uniform sampler2D texture1;
uniform sampler2D texture2;
void main()
{
    FragColor = mix(texture(texture1, TexCoord), texture(texture2, TexCoord), 0.2);
}
";

/// Missing closing brace
pub const BROKEN_FRAGMENT: &str = "#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
";
